// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, ResponseError};
use log::{error, info, warn};

use crate::api::error::ApiError;
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse, StrengthRequest, StrengthResponse,
};
use crate::api::utils::check_length;
use crate::api::AppState;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;

fn failure(err: ApiError) -> HttpResponse {
    HttpResponse::build(err.status_code()).json(PasswordGenerationResponse {
        success: false,
        password: None,
        strength: None,
        error: Some(err.to_string()),
    })
}

/// Generate a password
///
/// Generates a password from the selected character classes and optional words.
#[utoipa::path(
    post,
    path = "/api/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length or no character class selected", body = PasswordGenerationResponse),
        (status = 500, description = "Server error", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let config = &state.config;
    let req = generation_req.into_inner();

    let length = match check_length(req.length.unwrap_or(config.default_api_length as i64), config) {
        Ok(length) => length,
        Err(e) => {
            warn!("Rejected API length {:?}: {}", req.length, e);
            return failure(e);
        }
    };

    let options = PasswordGenerationOptions {
        length,
        include_uppercase: req.include_uppercase.unwrap_or(true),
        include_lowercase: req.include_lowercase.unwrap_or(true),
        include_digits: req.include_digits.unwrap_or(true),
        include_special: req.include_special.unwrap_or(true),
        avoid_ambiguous: req.avoid_ambiguous.unwrap_or(false),
        words: req.words,
    };

    let generator = PasswordGenerator::new();

    let password = match generator.generate_password(&options) {
        Ok(pwd) if !pwd.is_empty() => pwd,
        Ok(_) => {
            error!("Generator returned an empty password for length {}", length);
            return failure(ApiError::EmptyResult);
        }
        Err(e) => return failure(e.into()),
    };

    let report = generator.analyze_password_strength(&password);
    info!(
        "Generated {}-character password via API ({})",
        report.length, report.strength
    );

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(report.strength),
        error: None,
    })
}

/// Classify password strength
///
/// Rates a password as Weak, Medium or Strong from its length and character variety.
#[utoipa::path(
    post,
    path = "/api/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength classification", body = StrengthResponse)
    )
)]
pub async fn analyze_password(analysis_req: web::Json<StrengthRequest>) -> HttpResponse {
    let report = PasswordGenerator::new().analyze_password_strength(&analysis_req.password);

    HttpResponse::Ok().json(StrengthResponse {
        success: true,
        strength: report.strength,
        length: report.length,
        diversity: report.diversity,
    })
}
