// src/api/routes.rs
use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get a plain-text 400 like every other validation error
    cfg.app_data(form_config()).app_data(json_config());

    // HTML form
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::form::index))
            .route(web::post().to(handlers::form::generate)),
    );

    // JSON API
    cfg.service(
        web::scope("/api")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::generator::analyze_password)),
    );
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            log::debug!("Rejected form body: {}", err);
            let response = HttpResponse::BadRequest()
                .insert_header(ContentType::plaintext())
                .body(format!("Invalid form submission: {}", err));
            InternalError::from_response(err, response).into()
        })
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            log::debug!("Rejected JSON body: {}", err);
            let response = HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": err.to_string(),
            }));
            InternalError::from_response(err, response).into()
        })
}
