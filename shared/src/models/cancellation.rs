//! Cancellation Fee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cancellation fee calculator input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationContext {
    /// Deposit (bank-card hold) amount, currency-unit agnostic
    pub deposit_amount: f64,
    pub booking_date: NaiveDate,
    /// Usually today; explicit so the calculation never reads the clock
    pub evaluation_date: NaiveDate,
    /// A deposit hold exists and can be captured
    pub has_payment_intent: bool,
    /// Booking is still awaiting confirmation
    #[serde(default)]
    pub is_pending: bool,
}

/// What happens to the deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CancellationOutcome {
    /// Policy percentage is captured
    Charged,
    /// Admin chose to skip capture; full refund
    Waived,
    /// No capturable charge exists
    NotApplicable,
}

/// Cancellation fee calculator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationFeeResult {
    /// Whole days between evaluation and booking date; negative once past
    pub days_until_booking: i64,
    /// Percentage that will actually be captured (0, 50 or 100)
    pub charge_percentage: u8,
    /// Percentage the policy implies, for display next to a waiver
    pub policy_charge_percentage: u8,
    pub cancellation_fee: f64,
    pub refund_amount: f64,
    pub outcome: CancellationOutcome,
    pub message: String,
}

impl CancellationFeeResult {
    pub fn is_applicable(&self) -> bool {
        self.outcome != CancellationOutcome::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_pending_defaults_false() {
        let json = r#"{
            "depositAmount": 200,
            "bookingDate": "2025-03-12",
            "evaluationDate": "2025-03-10",
            "hasPaymentIntent": true
        }"#;
        let ctx: CancellationContext = serde_json::from_str(json).unwrap();
        assert!(!ctx.is_pending);
        assert_eq!(ctx.deposit_amount, 200.0);
        assert_eq!(
            ctx.booking_date,
            NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
        );
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&CancellationOutcome::NotApplicable).unwrap(),
            "\"notApplicable\""
        );
    }
}
