// Error types for the Guardrail pipeline

use crate::HttpStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::RouteNotFound(_) | Error::NotFound(_) => HttpStatus::NotFound.code(),
            Error::MethodNotAllowed(_) => HttpStatus::MethodNotAllowed.code(),
            Error::BadRequest(_) | Error::Validation(_) | Error::Deserialization(_) => {
                HttpStatus::BadRequest.code()
            }
            Error::Unauthorized(_) => HttpStatus::Unauthorized.code(),
            Error::Forbidden(_) => HttpStatus::Forbidden.code(),
            Error::UnprocessableEntity(_) => HttpStatus::UnprocessableEntity.code(),
            Error::Serialization(_) | Error::Internal(_) | Error::Io(_) => {
                HttpStatus::InternalServerError.code()
            }
        }
    }

    /// Get the HttpStatus enum for this error
    pub fn http_status(&self) -> HttpStatus {
        HttpStatus::from_code(self.status_code()).unwrap_or(HttpStatus::InternalServerError)
    }

    /// The bare human-readable message, without the status prefix.
    ///
    /// Client-error responses carry this text verbatim as their body, so a
    /// rejection produced as `Error::BadRequest("y cannot be 0")` surfaces to
    /// the caller as exactly `y cannot be 0`.
    pub fn message(&self) -> String {
        match self {
            Error::RouteNotFound(msg)
            | Error::MethodNotAllowed(msg)
            | Error::BadRequest(msg)
            | Error::Validation(msg)
            | Error::Unauthorized(msg)
            | Error::Forbidden(msg)
            | Error::NotFound(msg)
            | Error::UnprocessableEntity(msg)
            | Error::Serialization(msg)
            | Error::Deserialization(msg)
            | Error::Internal(msg) => msg.clone(),
            Error::Io(err) => err.to_string(),
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.http_status().is_server_error()
    }
}
