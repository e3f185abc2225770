// src/api/handlers/form.rs

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use log::{debug, error, info};

use crate::api::error::ApiError;
use crate::api::template::IndexPage;
use crate::api::types::GenerateForm;
use crate::api::utils::parse_length;
use crate::api::AppState;
use crate::generators::password::generate_password;
use crate::generators::strength::check_strength;
use crate::models::PasswordGenerationOptions;

/// Render the empty generator form.
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let page = IndexPage {
        length: state.config.default_form_length.to_string(),
        upper: true,
        lower: true,
        digits: true,
        special: true,
        ..Default::default()
    };

    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(page.render())
}

/// Generate a password from the submitted form and render it with its strength.
pub async fn generate(
    state: web::Data<AppState>,
    form: web::Form<GenerateForm>,
) -> Result<HttpResponse, ApiError> {
    let form = form.into_inner();
    let config = &state.config;

    let raw_length = form
        .length
        .clone()
        .unwrap_or_else(|| config.default_form_length.to_string());
    let length = parse_length(&raw_length, config).map_err(|e| {
        debug!("Rejected form length '{}': {}", raw_length, e);
        e
    })?;

    let options = PasswordGenerationOptions {
        length,
        include_uppercase: form.upper.is_some(),
        include_lowercase: form.lower.is_some(),
        include_digits: form.digits.is_some(),
        include_special: form.special.is_some(),
        avoid_ambiguous: form.avoid.is_some(),
        words: form.words.clone(),
    };

    let password = generate_password(&options)?;
    if password.is_empty() {
        error!("Generator returned an empty password for length {}", length);
        return Err(ApiError::EmptyResult);
    }

    let strength = check_strength(&password);
    info!(
        "Generated {}-character password via form ({})",
        password.chars().count(),
        strength
    );

    let page = IndexPage {
        length: raw_length,
        upper: options.include_uppercase,
        lower: options.include_lowercase,
        digits: options.include_digits,
        special: options.include_special,
        avoid: options.avoid_ambiguous,
        words: form.words.as_deref().unwrap_or(""),
        result: Some((password.as_str(), strength)),
    };

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(page.render()))
}
