//! Clients for the external services the image pipeline depends on: AWS KMS for the
//! credential blob, Google Cloud Vision for OCR and Google Cloud Natural Language for
//! entity recognition.

pub mod google;
pub mod kms;
