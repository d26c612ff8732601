//! Wire types for the Google Cloud Vision and Natural Language REST APIs.

use model::entity::Entity;
use model::image::TextAnnotation;
use serde::{Deserialize, Serialize};

pub const TEXT_DETECTION_FEATURE: &str = "TEXT_DETECTION";
pub const PLAIN_TEXT_DOCUMENT: &str = "PLAIN_TEXT";
pub const UTF8_ENCODING: &str = "UTF8";

#[derive(Serialize, Debug)]
pub struct AnnotateImagesRequest<'a> {
    pub requests: Vec<AnnotateImageRequest<'a>>,
}

#[derive(Serialize, Debug)]
pub struct AnnotateImageRequest<'a> {
    pub image: ImageContent<'a>,
    pub features: Vec<Feature>,
}

#[derive(Serialize, Debug)]
pub struct ImageContent<'a> {
    pub content: &'a str,
}

#[derive(Serialize, Debug)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
}

#[derive(Deserialize, Debug, Default)]
pub struct AnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,
    pub error: Option<GoogleRpcStatus>,
}

#[derive(Deserialize, Debug)]
pub struct GoogleRpcStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEntitiesRequest<'a> {
    pub document: Document<'a>,
    pub encoding_type: &'static str,
}

#[derive(Serialize, Debug)]
pub struct Document<'a> {
    #[serde(rename = "type")]
    pub document_type: &'static str,
    pub content: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct AnalyzeEntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
}
