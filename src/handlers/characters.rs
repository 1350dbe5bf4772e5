use actix_web::{get, web, HttpResponse, Responder};
use log::info;
use crate::models::ScriptResponse;
use crate::services::kana::{katakana_rows, HIRAGANA_PENDING};

#[get("/api/characters/{script}")]
pub async fn get_characters(path: web::Path<String>) -> impl Responder {
    let script = path.into_inner().to_lowercase();
    match script.as_str() {
        "katakana" => HttpResponse::Ok().json(ScriptResponse {
            script: "katakana",
            rows: katakana_rows(),
            message: None,
        }),
        "hiragana" => HttpResponse::Ok().json(ScriptResponse {
            script: "hiragana",
            rows: &[],
            message: Some(HIRAGANA_PENDING),
        }),
        _ => {
            info!("Unknown script requested: {}", script);
            HttpResponse::NotFound().body(format!("Script '{}' not supported", script))
        }
    }
}
