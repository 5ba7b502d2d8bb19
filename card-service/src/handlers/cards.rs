use crate::dtos::{
    CardUrlRequest, CardUrlResponse, LetterRequest, LetterResponse, PhraseRequest, PhraseResponse,
};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// Card image URL for a sentiment.
///
/// Unmapped sentiments and unstocked buckets both answer with an empty
/// URL; the card client treats that as "no image".
pub async fn get_card_url(
    State(state): State<AppState>,
    Json(payload): Json<CardUrlRequest>,
) -> Result<impl IntoResponse, AppError> {
    let card_img_url = state
        .images
        .fetch_image_url(&payload.sentiment)
        .await?
        .unwrap_or_default();

    Ok(Json(CardUrlResponse { card_img_url }))
}

/// Generate a short card phrase, with an image from the sentiment's
/// bucket unless the client supplied its own.
pub async fn create_phrase(
    State(state): State<AppState>,
    Json(payload): Json<PhraseRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let phrase = state
        .writer
        .phrase(&payload.target, &payload.sentiment, &payload.text_type)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Phrase generation failed");
            AppError::BadGateway(e.to_string())
        })?;

    let img_url = match payload.image_url {
        Some(url) => url,
        None => state
            .images
            .fetch_image_url(&payload.sentiment)
            .await?
            .unwrap_or_default(),
    };

    tracing::info!(
        sentiment = %payload.sentiment,
        phrase_len = phrase.len(),
        "Card phrase generated"
    );

    Ok(Json(PhraseResponse { phrase, img_url }))
}

/// Generate a letter: `AI` composes one from the context, `custom`
/// rewrites the user's own text.
pub async fn create_letter(
    State(state): State<AppState>,
    Path(letter_type): Path<String>,
    Json(payload): Json<LetterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let letter = match letter_type.as_str() {
        "AI" => state.writer.ai_letter(&payload.context).await,
        "custom" => state.writer.polish_letter(&payload.context).await,
        other => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Invalid letter type: {}",
                other
            )))
        }
    }
    .map_err(|e| {
        tracing::error!(letter_type = %letter_type, error = %e, "Letter generation failed");
        AppError::BadGateway(e.to_string())
    })?;

    Ok(Json(LetterResponse { letter }))
}
