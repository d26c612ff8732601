use serde::{self, Deserialize};
use std::fmt;

/// Google service account credential, as found in the JSON key file.
///
/// Lives for a single invocation. `Debug` never prints the private key.
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceCredential {
    pub client_email: String,
    pub private_key: String,
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
