use actix_web::{post, web, HttpResponse, Responder};
use log::{error, info};
use serde_json::Value;
use crate::models::{AppState, TranslationRequest};
use crate::utils::is_blank;

pub const TEXT_REQUIRED: &str = "Text is required";
pub const TRANSLATE_FAILED: &str = "Failed to translate text";

/// Pull a usable `text` out of the raw body, if there is one
fn extract_text(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<TranslationRequest>(body) {
        Ok(TranslationRequest { text: Value::String(text) }) if !is_blank(&text) => Some(text),
        _ => None,
    }
}

#[post("/api/translate")]
pub async fn translate(data: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let Some(text) = extract_text(&body) else {
        info!("Rejected translation request without usable text");
        return HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(TEXT_REQUIRED);
    };

    match data.translator.translate(&text).await {
        Ok(result) => {
            info!("Translated {} chars via {}: {}", text.chars().count(), data.translator.name(), result.romaji);
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            error!("Translation error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(TRANSLATE_FAILED)
        }
    }
}
