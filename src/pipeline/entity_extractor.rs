use crate::result::error::{nlp_error, Result};
use model::credential::ServiceCredential;
use model::entity::{Entity, NameResult};
use model::image::RecognizedText;
use providers::google::EntityAnalyzer;

/// Sends the recognized text to entity analysis and picks the person name.
pub async fn extract_person_name(
    entity_analyzer: &impl EntityAnalyzer,
    text: &RecognizedText,
    credential: &ServiceCredential,
) -> Result<NameResult> {
    let entities = entity_analyzer
        .analyze_entities(text, credential)
        .await
        .map_err(nlp_error)?;

    Ok(select_person_name(&entities))
}

/// Only the first person entity counts, even when it has no name. Entities are taken in
/// the order the service returned them.
pub fn select_person_name(entities: &[Entity]) -> NameResult {
    entities
        .iter()
        .find(|entity| entity.is_person())
        .map(|person| NameResult::from_full_name(&person.name))
        .unwrap_or_default()
}
