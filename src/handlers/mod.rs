use actix_web::web;

pub mod characters;
pub mod config;
pub mod history;
pub mod quiz;
pub mod translate;

/// Register every endpoint on an app
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(translate::translate)
        .service(characters::get_characters)
        .service(quiz::next_card)
        .service(quiz::check_answer)
        .service(history::get_history)
        .service(config::get_config);
}

#[cfg(test)]
pub fn test_state(
    translator: std::sync::Arc<dyn crate::services::translator::Translator>,
) -> web::Data<crate::models::AppState> {
    web::Data::new(crate::models::AppState {
        translator,
        quiz_strategy: crate::services::options::QuizStrategy::Balanced,
        started_at: chrono::Utc::now(),
    })
}
