//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::SpaceNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (client must refresh and retry)
            Self::PriceMismatch | Self::InvalidStatusTransition => StatusCode::CONFLICT,

            // 422 Unprocessable (well-formed, but cannot be priced)
            Self::QuoteRequired | Self::ValueOutOfRange => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
