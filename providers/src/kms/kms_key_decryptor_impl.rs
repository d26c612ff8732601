use crate::kms::{KeyDecryptor, KeyDecryptorError};
use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use rusoto_kms::{DecryptRequest, Kms};

pub struct KmsKeyDecryptor<T: Kms + Sync + Send> {
    kms_client: T,
}

impl<T: Kms + Sync + Send> KmsKeyDecryptor<T> {
    pub fn new(kms_client: T) -> Self {
        Self { kms_client }
    }
}

#[async_trait]
impl<T: Kms + Sync + Send> KeyDecryptor for KmsKeyDecryptor<T> {
    async fn decrypt(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>, KeyDecryptorError> {
        let input = DecryptRequest {
            ciphertext_blob: Bytes::from(ciphertext),
            ..DecryptRequest::default()
        };

        let output = self.kms_client.decrypt(input).await.map_err(|e| {
            KeyDecryptorError::Unknown(anyhow!(e).context("Error decrypting ciphertext with KMS"))
        })?;

        output
            .plaintext
            .map(|plaintext| plaintext.to_vec())
            .ok_or(KeyDecryptorError::MissingPlaintext)
    }
}
