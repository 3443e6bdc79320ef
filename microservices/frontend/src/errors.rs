//! Error types for the frontend service

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

pub type Result<T> = std::result::Result<T, FrontendError>;

#[derive(Debug)]
pub enum FrontendError {
    /// Backend request failed, including an undecodable body
    Http(reqwest::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::Http(err) => write!(f, "HTTP error: {}", err),
            FrontendError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for FrontendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrontendError::Http(err) => Some(err),
            FrontendError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for FrontendError {
    fn from(err: reqwest::Error) -> Self {
        FrontendError::Http(err)
    }
}

impl ResponseError for FrontendError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
