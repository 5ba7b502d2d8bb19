//! Request and response bodies for the card endpoints.
//!
//! Field names mirror the card client's existing wire format
//! (`cardImgUrl`, `imgURL`).

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct CardUrlRequest {
    pub sentiment: String,
}

#[derive(Debug, Serialize)]
pub struct CardUrlResponse {
    #[serde(rename = "cardImgUrl")]
    pub card_img_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PhraseRequest {
    #[validate(length(min = 1, message = "target is required"))]
    pub target: String,

    #[validate(length(min = 1, message = "sentiment is required"))]
    pub sentiment: String,

    #[validate(length(min = 1, message = "type is required"))]
    #[serde(rename = "type")]
    pub text_type: String,

    /// Client-chosen image; when absent the service picks one from the
    /// sentiment's bucket.
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PhraseResponse {
    pub phrase: String,

    #[serde(rename = "imgURL")]
    pub img_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LetterRequest {
    #[validate(length(min = 1, message = "context is required"))]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub letter: String,
}
