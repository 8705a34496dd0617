use crate::helper::api_error::ErrorBody;
use actix_web::{error, web, HttpResponse};

pub mod admin;
pub mod forms;
pub mod public;

/// Malformed or wrongly-typed JSON bodies become `400 {error}` instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            log::debug!("Rejected request body: {}", err);
            let response = HttpResponse::BadRequest().json(ErrorBody {
                error: "Invalid request body".to_string(),
            });
            error::InternalError::from_response(err, response).into()
        })
}

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody { error: "Not found".to_string() })
}

/// Registers every `/api` route.
pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(public::config_public)
            .configure(forms::config_forms)
            .configure(admin::config_admin)
            .default_service(web::to(api_not_found)),
    );
}
