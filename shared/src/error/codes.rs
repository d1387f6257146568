//! Unified error codes for the booking platform
//!
//! This module defines all error codes used across booking-server, the pricing
//! engine and the admin frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 5xxx: Payment / cancellation errors
//! - 6xxx: Space errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,
    /// Amount exceeds the representable monetary range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Reservation ====================
    /// Start/end time is not a valid HH:MM value
    InvalidTimeRange = 4002,
    /// Number of people must be at least 1
    InvalidHeadcount = 4003,
    /// Reservation spans zero time
    NonPositiveDuration = 4004,
    /// Submitted price does not match the recomputed price
    PriceMismatch = 4005,
    /// Booking status transition is not allowed
    InvalidStatusTransition = 4006,
    /// Space is priced by manual quote only
    QuoteRequired = 4007,

    // ==================== 5xxx: Payment ====================
    /// Deposit or price amount is negative or not a number
    InvalidAmount = 5001,

    // ==================== 6xxx: Space ====================
    /// Space pricing configuration not found
    SpaceNotFound = 6001,
    /// Space pricing configuration is invalid
    SpaceConfigInvalid = 6002,
    /// Capacity tiers overlap or are out of order
    TierRangeInvalid = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Reservation
            ErrorCode::InvalidTimeRange => "Invalid reservation time range",
            ErrorCode::InvalidHeadcount => "Number of people must be at least 1",
            ErrorCode::NonPositiveDuration => "Reservation duration must be positive",
            ErrorCode::PriceMismatch => "Price has changed, please refresh the quote",
            ErrorCode::InvalidStatusTransition => "Booking status transition is not allowed",
            ErrorCode::QuoteRequired => "Space is priced on quote only",

            // Payment
            ErrorCode::InvalidAmount => "Invalid amount",

            // Space
            ErrorCode::SpaceNotFound => "Space not found",
            ErrorCode::SpaceConfigInvalid => "Space pricing configuration is invalid",
            ErrorCode::TierRangeInvalid => "Capacity tiers overlap or are out of order",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Reservation
            4002 => Ok(ErrorCode::InvalidTimeRange),
            4003 => Ok(ErrorCode::InvalidHeadcount),
            4004 => Ok(ErrorCode::NonPositiveDuration),
            4005 => Ok(ErrorCode::PriceMismatch),
            4006 => Ok(ErrorCode::InvalidStatusTransition),
            4007 => Ok(ErrorCode::QuoteRequired),

            // Payment
            5001 => Ok(ErrorCode::InvalidAmount),

            // Space
            6001 => Ok(ErrorCode::SpaceNotFound),
            6002 => Ok(ErrorCode::SpaceConfigInvalid),
            6003 => Ok(ErrorCode::TierRangeInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::PriceMismatch.code(), 4005);
        assert_eq!(ErrorCode::InvalidAmount.code(), 5001);
        assert_eq!(ErrorCode::SpaceNotFound.code(), 6001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_round_trip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::QuoteRequired,
            ErrorCode::ValueOutOfRange,
            ErrorCode::TierRangeInvalid,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::RequiredField.to_string(), "E0007");
        assert_eq!(ErrorCode::PriceMismatch.to_string(), "E4005");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::SpaceNotFound).unwrap();
        assert_eq!(json, "6001");
        let code: ErrorCode = serde_json::from_str("4007").unwrap();
        assert_eq!(code, ErrorCode::QuoteRequired);
    }
}
