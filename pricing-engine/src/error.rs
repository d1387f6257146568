//! Error types for the pricing engine
//!
//! Only the strict paths (submission, config validation, lifecycle) return
//! errors. Preview calculators return result variants instead.

use shared::error::{AppError, ErrorCode};
use shared::models::BookingStatus;
use thiserror::Error;

/// Pricing engine error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Start/end time is not a valid "HH:MM"
    #[error("{field} is not a valid HH:MM time: {value:?}")]
    MalformedTime { field: &'static str, value: String },

    /// Headcount below 1
    #[error("Number of people must be at least 1, got {0}")]
    InvalidHeadcount(u32),

    /// Reservation spans no time
    #[error("Reservation {start}-{end} has no duration")]
    NonPositiveDuration { start: String, end: String },

    /// Negative or non-finite amount
    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    /// Empty space key
    #[error("spaceType is required")]
    MissingSpaceType,

    /// Space pricing configuration is inconsistent
    #[error("Invalid pricing config for {space_type}: {reason}")]
    InvalidConfig { space_type: String, reason: String },

    /// Capacity tiers overlap or are out of order
    #[error("Invalid tiers for {space_type}: {reason}")]
    InvalidTierRange { space_type: String, reason: String },

    /// Numeric price submitted for a quote-only space
    #[error("Space {0} is priced on quote only")]
    QuoteRequired(String),

    /// Unknown space
    #[error("No pricing configuration for space {0}")]
    ConfigMissing(String),

    /// Computed total left the monetary range
    #[error("Price for space {0} exceeds the supported amount range")]
    AmountOverflow(String),

    /// Client preview is stale
    #[error("Submitted price {submitted:.2} does not match computed price {expected:.2}")]
    PriceMismatch { submitted: f64, expected: f64 },

    /// Booking status does not allow this operation
    #[error("Cannot move booking from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

impl PricingError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MalformedTime { .. } => ErrorCode::InvalidTimeRange,
            Self::InvalidHeadcount(_) => ErrorCode::InvalidHeadcount,
            Self::NonPositiveDuration { .. } => ErrorCode::NonPositiveDuration,
            Self::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            Self::MissingSpaceType => ErrorCode::RequiredField,
            Self::InvalidConfig { .. } => ErrorCode::SpaceConfigInvalid,
            Self::InvalidTierRange { .. } => ErrorCode::TierRangeInvalid,
            Self::QuoteRequired(_) => ErrorCode::QuoteRequired,
            Self::ConfigMissing(_) => ErrorCode::SpaceNotFound,
            Self::AmountOverflow(_) => ErrorCode::ValueOutOfRange,
            Self::PriceMismatch { .. } => ErrorCode::PriceMismatch,
            Self::InvalidTransition { .. } => ErrorCode::InvalidStatusTransition,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let app = AppError::with_message(err.error_code(), err.to_string());
        match err {
            PricingError::MalformedTime { field, value } => {
                app.with_detail("field", field).with_detail("value", value)
            }
            PricingError::ConfigMissing(space_type)
            | PricingError::QuoteRequired(space_type)
            | PricingError::AmountOverflow(space_type) => app.with_detail("spaceType", space_type),
            PricingError::PriceMismatch {
                submitted,
                expected,
            } => app
                .with_detail("submittedPrice", submitted)
                .with_detail("expectedPrice", expected),
            _ => app,
        }
    }
}

/// Result type for strict pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
