use serde::{self, Deserialize, Serialize};

const PERSON_ENTITY_TYPE: &str = "person";
const UNKNOWN_NAME: &str = "unknown";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
        }
    }

    /// Entity types are compared ignoring case (`PERSON`, `Person` and `person` match).
    pub fn is_person(&self) -> bool {
        self.entity_type.eq_ignore_ascii_case(PERSON_ENTITY_TYPE)
    }
}

/// Name pair returned to the client. Empty fields mean no person was found.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NameResult {
    pub first_name: String,
    pub last_name: String,
}

impl NameResult {
    /// Placeholder body sent with every failed response.
    pub fn unknown() -> Self {
        Self {
            first_name: UNKNOWN_NAME.to_owned(),
            last_name: UNKNOWN_NAME.to_owned(),
        }
    }

    /// The first word is the first name; the remaining words, joined by single spaces,
    /// are the last name.
    pub fn from_full_name(full_name: &str) -> Self {
        let mut parts = full_name.split_whitespace();
        let first_name = parts.next().unwrap_or_default().to_owned();
        let last_name = parts.collect::<Vec<&str>>().join(" ");

        Self {
            first_name,
            last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, NameResult};
    use rstest::rstest;

    #[rstest]
    #[case::lowercase("person")]
    #[case::uppercase("PERSON")]
    #[case::mixed_case("Person")]
    fn person_type_is_case_insensitive(#[case] entity_type: &str) {
        assert!(Entity::new("Jane", entity_type).is_person());
    }

    #[rstest]
    #[case::organization("ORGANIZATION")]
    #[case::location("LOCATION")]
    #[case::prefix("PERSONAL")]
    fn other_types_are_not_person(#[case] entity_type: &str) {
        assert!(!Entity::new("Acme", entity_type).is_person());
    }

    #[rstest]
    #[case::single_word("Cher", "Cher", "")]
    #[case::two_words("Jane Public", "Jane", "Public")]
    #[case::three_words("Jane Q Public", "Jane", "Q Public")]
    #[case::extra_whitespace("  Jane \t Q   Public ", "Jane", "Q Public")]
    #[case::blank("   ", "", "")]
    fn splits_full_name(#[case] full_name: &str, #[case] first: &str, #[case] last: &str) {
        let name = NameResult::from_full_name(full_name);
        assert_eq!(first, name.first_name);
        assert_eq!(last, name.last_name);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let body = serde_json::to_string(&NameResult::unknown()).unwrap();
        assert_eq!(r#"{"first_name":"unknown","last_name":"unknown"}"#, body);
    }

    #[test]
    fn entity_type_uses_type_key() {
        let entity: Entity = serde_json::from_str(r#"{"name":"Jane","type":"PERSON"}"#).unwrap();
        assert_eq!(Entity::new("Jane", "PERSON"), entity);
    }
}
