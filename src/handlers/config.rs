use actix_web::{get, web, HttpResponse, Responder};
use chrono::SecondsFormat;
use crate::models::{AppState, ServiceInfo};

#[get("/api/config")]
pub async fn get_config(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        translator: data.translator.name(),
        quiz_strategy: data.quiz_strategy,
        started_at: data.started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use crate::handlers::{routes, test_state};
    use crate::services::lookup::LookupTranslator;

    #[actix_web::test]
    async fn test_config_reports_backend() {
        let app = test::init_service(
            App::new().app_data(test_state(Arc::new(LookupTranslator::new()))).configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let info: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info["name"], "honyakud");
        assert_eq!(info["translator"], "lookup");
        assert_eq!(info["quiz_strategy"], "balanced");
        assert!(info["started_at"].as_str().unwrap().ends_with('Z'));
    }
}
