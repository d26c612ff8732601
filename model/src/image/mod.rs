use serde::{self, Deserialize, Serialize};

/// Base64 image sent by the client. The content is forwarded to text detection as-is.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub image_data_base64: String,
}

/// One text block found by OCR. The first annotation of a detection result holds the whole
/// text of the image; the following ones are single words.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecognizedText {
    pub text: String,
}

impl RecognizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for RecognizedText {
    fn from(text: String) -> Self {
        Self { text }
    }
}
