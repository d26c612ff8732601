use async_trait::async_trait;

pub mod kms_key_decryptor_impl;

pub use kms_key_decryptor_impl::KmsKeyDecryptor;

#[cfg(any(test, feature = "test_mocks"))]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum KeyDecryptorError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("decrypt response did not contain a plaintext")]
    MissingPlaintext,
}

#[async_trait]
pub trait KeyDecryptor
where
    Self: Sync + Send,
{
    /// Decrypts a raw ciphertext blob, returning the plaintext bytes.
    async fn decrypt(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>, KeyDecryptorError>;
}

#[cfg(any(test, feature = "test_mocks"))]
mock! {
    pub KeyDecryptor {}
    #[async_trait]
    impl KeyDecryptor for KeyDecryptor {
        async fn decrypt(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>, KeyDecryptorError>;
    }
}
