use actix_web::{get, HttpResponse, Responder};
use crate::models::HistoryResponse;

pub const HISTORY_PENDING: &str = "Translation history coming soon...";

// Nothing is stored yet, so history is always empty
#[get("/api/history")]
pub async fn get_history() -> impl Responder {
    HttpResponse::Ok().json(HistoryResponse {
        entries: Vec::new(),
        message: HISTORY_PENDING,
    })
}
