use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, info};
use crate::models::{AnswerRequest, AnswerResponse, AppState, QuizQuery};
use crate::services::kana::katakana;
use crate::services::options::{deal_card, QuizStrategy};

#[get("/api/quiz/next")]
pub async fn next_card(
    data: web::Data<AppState>,
    query: web::Query<QuizQuery>,
) -> impl Responder {
    let strategy = match query.strategy.as_deref() {
        None => data.quiz_strategy,
        Some(name) => match name.parse::<QuizStrategy>() {
            Ok(s) => s,
            Err(e) => return HttpResponse::BadRequest().body(e),
        },
    };

    let mut rng = rand::thread_rng();
    match deal_card(katakana(), query.current, strategy, &mut rng) {
        Some(card) => {
            debug!("Dealt card {} ({}) with {} options", card.index, card.character.romaji, card.options.len());
            HttpResponse::Ok().json(card)
        }
        None => HttpResponse::InternalServerError().finish(),
    }
}

#[post("/api/quiz/answer")]
pub async fn check_answer(answer: web::Json<AnswerRequest>) -> impl Responder {
    let Some(&expected) = katakana().get(answer.index) else {
        return HttpResponse::BadRequest().body(format!("Unknown card index {}", answer.index));
    };

    let correct = answer.romaji.trim().eq_ignore_ascii_case(expected.romaji);
    info!("Answer for {}: {} ({})", expected.glyph, answer.romaji, if correct { "correct" } else { "wrong" });

    HttpResponse::Ok().json(AnswerResponse {
        correct,
        answer: expected,
    })
}
