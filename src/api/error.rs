// src/api/error.rs
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::generators::GeneratorError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input for password length.")]
    InvalidLength,

    #[error("Password length must be between {min} and {max}.")]
    LengthOutOfRange { min: usize, max: usize },

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Failed to generate password.")]
    EmptyResult,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidLength
            | ApiError::LengthOutOfRange { .. }
            | ApiError::Generator(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyResult => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
