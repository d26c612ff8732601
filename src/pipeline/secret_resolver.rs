use crate::result::error::{PipelineError, Result};
use anyhow::anyhow;
use model::credential::ServiceCredential;
use providers::kms::KeyDecryptor;

/// Turns the configured credential blob (KMS ciphertext, base64 encoded) into the Google
/// service account credential. The plaintext is never logged.
pub async fn resolve_service_credential(
    encrypted_credential: Option<&str>,
    key_decryptor: &impl KeyDecryptor,
) -> Result<ServiceCredential> {
    let encrypted_credential = encrypted_credential
        .map(str::trim)
        .filter(|blob| !blob.is_empty())
        .ok_or_else(|| {
            PipelineError::Configuration(
                "encrypted service account credential is not configured".to_owned(),
            )
        })?;

    // Wrapped blobs (`base64` and `openssl enc -a` break lines) decode like unwrapped ones.
    let encrypted_credential: String = encrypted_credential
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let ciphertext = base64::decode(encrypted_credential).map_err(|e| {
        PipelineError::Decryption(anyhow!(e).context("credential blob is not valid base64"))
    })?;

    let plaintext = key_decryptor.decrypt(ciphertext).await?;

    // The error must not echo the plaintext, so only the parse location is kept.
    serde_json::from_slice::<ServiceCredential>(&plaintext).map_err(|e| {
        PipelineError::Decryption(anyhow!(
            "decrypted credential is not a service account key (line {}, column {})",
            e.line(),
            e.column()
        ))
    })
}
