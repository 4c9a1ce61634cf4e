use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Service-specific error types
///
/// Missing data (unknown transaction, block or receipt) is not an error and
/// never shows up here; these variants cover transport and parse failures.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Error reaching the Ethereum RPC node
    #[error("RPC connection error: {0}")]
    RpcConnection(String),

    /// The node answered with a body that is not the expected JSON-RPC envelope
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// The host page address could not be parsed
    #[error("Invalid page address: {0}")]
    InvalidPage(String),

    /// The service could not be set up
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Structured error response for the API
#[derive(Serialize)]
struct ErrorResponse {
    /// Human-readable error message
    error: String,

    /// Machine-readable error code
    error_code: String,

    /// Optional detailed error information
    details: Option<String>,
}

impl ServiceError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ServiceError::RpcConnection(details) => {
                (StatusCode::BAD_GATEWAY, "RPC_CONNECTION_ERROR", details)
            }
            ServiceError::InvalidResponse(details) => {
                (StatusCode::BAD_GATEWAY, "INVALID_RPC_RESPONSE", details)
            }
            ServiceError::InvalidPage(details) => {
                (StatusCode::BAD_REQUEST, "INVALID_PAGE", details)
            }
            ServiceError::Configuration(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                details,
            ),
        }
    }
}

impl ResponseError for ServiceError {
    /// Convert the error to an HTTP response with a JSON error body
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, details) = self.parts();

        HttpResponse::build(status_code).json(ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details: Some(details.to_string()),
        })
    }

    fn status_code(&self) -> StatusCode {
        self.parts().0
    }
}
