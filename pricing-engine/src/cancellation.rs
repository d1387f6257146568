//! Cancellation Fee Calculator
//!
//! Decides how much of a deposit hold is captured when a booking is cancelled:
//!
//! | Days before booking | Charge |
//! |---------------------|--------|
//! | `>= 7`              | 0%     |
//! | `1..=6`             | 50%    |
//! | `<= 0` (same day, past) | 100% |
//!
//! The percentage and the displayed message come from the same
//! [`ChargeBracket`], so they can never disagree.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{CancellationContext, CancellationFeeResult, CancellationOutcome};

use super::error::{PricingError, PricingResult};
use super::money::{round_money, to_decimal};

/// Days before the booking from which cancellation is free
pub const FREE_CANCELLATION_DAYS: i64 = 7;
/// Minimum days before the booking for the partial charge
pub const PARTIAL_CHARGE_MIN_DAYS: i64 = 1;
/// Percentage captured inside the partial window
pub const PARTIAL_CHARGE_PERCENT: u8 = 50;
/// Percentage captured on the booking day or later
pub const FULL_CHARGE_PERCENT: u8 = 100;

/// Cancellation policy breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationPolicy {
    pub free_cancellation_days: i64,
    pub partial_charge_min_days: i64,
    pub partial_charge_percent: u8,
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self {
            free_cancellation_days: FREE_CANCELLATION_DAYS,
            partial_charge_min_days: PARTIAL_CHARGE_MIN_DAYS,
            partial_charge_percent: PARTIAL_CHARGE_PERCENT,
        }
    }
}

impl CancellationPolicy {
    /// Breakpoints must be ordered and the partial percentage at most 100
    pub fn validate(&self) -> PricingResult<()> {
        if self.partial_charge_min_days > self.free_cancellation_days {
            return Err(PricingError::InvalidConfig {
                space_type: "cancellation-policy".to_string(),
                reason: format!(
                    "partial charge starts at J-{} but free cancellation at J-{}",
                    self.partial_charge_min_days, self.free_cancellation_days
                ),
            });
        }
        if self.partial_charge_percent > FULL_CHARGE_PERCENT {
            return Err(PricingError::InvalidConfig {
                space_type: "cancellation-policy".to_string(),
                reason: format!(
                    "partial charge of {}% exceeds 100%",
                    self.partial_charge_percent
                ),
            });
        }
        Ok(())
    }

    /// Bracket for a day count
    pub fn bracket_for(&self, days_until_booking: i64) -> ChargeBracket {
        if days_until_booking >= self.free_cancellation_days {
            ChargeBracket::Free
        } else if days_until_booking >= self.partial_charge_min_days {
            ChargeBracket::Partial(self.partial_charge_percent)
        } else {
            ChargeBracket::Full
        }
    }
}

/// Policy bucket a cancellation falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeBracket {
    Free,
    Partial(u8),
    Full,
}

impl ChargeBracket {
    pub fn percentage(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Partial(pct) => *pct,
            Self::Full => FULL_CHARGE_PERCENT,
        }
    }

    /// Policy message shown to the admin ("Annulation à J-2 : 50% de frais appliqués")
    pub fn message(&self, days_until_booking: i64) -> String {
        let day = day_label(days_until_booking);
        match self {
            Self::Free => format!("Annulation à {day} : annulation gratuite, aucun frais"),
            Self::Partial(pct) => format!("Annulation à {day} : {pct}% de frais appliqués"),
            Self::Full => format!("Annulation à {day} : 100% de frais appliqués"),
        }
    }
}

/// "J-2" before the booking day, "J-0" on the day, "J+1" after
fn day_label(days_until_booking: i64) -> String {
    if days_until_booking >= 0 {
        format!("J-{days_until_booking}")
    } else {
        format!("J+{}", -days_until_booking)
    }
}

/// Cancellation fee calculator for a given policy
#[derive(Debug, Clone, Copy, Default)]
pub struct CancellationCalculator {
    policy: CancellationPolicy,
}

impl CancellationCalculator {
    /// Calculator for a validated policy; an inconsistent policy is rejected
    pub fn new(policy: CancellationPolicy) -> PricingResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &CancellationPolicy {
        &self.policy
    }

    /// Fee the policy implies for this context
    pub fn compute(&self, ctx: &CancellationContext) -> CancellationFeeResult {
        self.evaluate(ctx, false)
    }

    /// Skip-capture variant: nothing is charged, the full deposit is refunded,
    /// and the policy percentage is still reported for display.
    pub fn compute_waived(&self, ctx: &CancellationContext) -> CancellationFeeResult {
        self.evaluate(ctx, true)
    }

    fn evaluate(&self, ctx: &CancellationContext, skip_capture: bool) -> CancellationFeeResult {
        let days = (ctx.booking_date - ctx.evaluation_date).num_days();

        if !ctx.has_payment_intent || ctx.is_pending {
            tracing::debug!(
                days_until_booking = days,
                has_payment_intent = ctx.has_payment_intent,
                is_pending = ctx.is_pending,
                "No capturable deposit, cancellation fee not applicable"
            );
            let message = if ctx.is_pending {
                "Réservation non confirmée : aucun frais d'annulation".to_string()
            } else {
                "Aucune empreinte bancaire : aucun frais d'annulation".to_string()
            };
            return CancellationFeeResult {
                days_until_booking: days,
                charge_percentage: 0,
                policy_charge_percentage: 0,
                cancellation_fee: 0.0,
                refund_amount: 0.0,
                outcome: CancellationOutcome::NotApplicable,
                message,
            };
        }

        let deposit = to_decimal(ctx.deposit_amount);
        if deposit < Decimal::ZERO {
            tracing::warn!(
                deposit_amount = ctx.deposit_amount,
                "Negative deposit amount clamped to zero"
            );
        }
        let deposit = round_money(deposit.max(Decimal::ZERO));

        let bracket = self.policy.bracket_for(days);
        let policy_pct = bracket.percentage();

        if skip_capture {
            return CancellationFeeResult {
                days_until_booking: days,
                charge_percentage: 0,
                policy_charge_percentage: policy_pct,
                cancellation_fee: 0.0,
                refund_amount: deposit.to_f64().unwrap_or_default(),
                outcome: CancellationOutcome::Waived,
                message: format!(
                    "{} (capture annulée : remboursement intégral)",
                    bracket.message(days)
                ),
            };
        }

        let ratio = Decimal::from(policy_pct) / Decimal::ONE_HUNDRED;
        let fee = round_money(deposit.saturating_mul(ratio));
        let refund = deposit - fee;

        CancellationFeeResult {
            days_until_booking: days,
            charge_percentage: policy_pct,
            policy_charge_percentage: policy_pct,
            cancellation_fee: fee.to_f64().unwrap_or_default(),
            refund_amount: refund.to_f64().unwrap_or_default(),
            outcome: CancellationOutcome::Charged,
            message: bracket.message(days),
        }
    }
}

/// Cancellation fee under the default policy
pub fn compute_cancellation_fee(ctx: &CancellationContext) -> CancellationFeeResult {
    CancellationCalculator::default().compute(ctx)
}

/// Skip-capture cancellation under the default policy
pub fn compute_cancellation_fee_waived(ctx: &CancellationContext) -> CancellationFeeResult {
    CancellationCalculator::default().compute_waived(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn ctx(deposit: f64, days_before: i64) -> CancellationContext {
        let evaluation_date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let booking_date = if days_before >= 0 {
            evaluation_date + Days::new(days_before as u64)
        } else {
            evaluation_date - Days::new(days_before.unsigned_abs())
        };
        CancellationContext {
            deposit_amount: deposit,
            booking_date,
            evaluation_date,
            has_payment_intent: true,
            is_pending: false,
        }
    }

    #[test]
    fn test_breakpoints() {
        let free = compute_cancellation_fee(&ctx(200.0, 10));
        assert_eq!(free.charge_percentage, 0);
        assert_eq!(free.cancellation_fee, 0.0);
        assert_eq!(free.refund_amount, 200.0);
        assert_eq!(free.outcome, CancellationOutcome::Charged);

        let partial = compute_cancellation_fee(&ctx(200.0, 2));
        assert_eq!(partial.days_until_booking, 2);
        assert_eq!(partial.charge_percentage, 50);
        assert_eq!(partial.cancellation_fee, 100.0);
        assert_eq!(partial.refund_amount, 100.0);
        assert_eq!(partial.message, "Annulation à J-2 : 50% de frais appliqués");

        let past = compute_cancellation_fee(&ctx(200.0, -1));
        assert_eq!(past.days_until_booking, -1);
        assert_eq!(past.charge_percentage, 100);
        assert_eq!(past.cancellation_fee, 200.0);
        assert_eq!(past.refund_amount, 0.0);
        assert_eq!(past.message, "Annulation à J+1 : 100% de frais appliqués");
    }

    #[test]
    fn test_bracket_edges() {
        let policy = CancellationPolicy::default();
        assert_eq!(policy.bracket_for(7), ChargeBracket::Free);
        assert_eq!(policy.bracket_for(6), ChargeBracket::Partial(50));
        assert_eq!(policy.bracket_for(1), ChargeBracket::Partial(50));
        assert_eq!(policy.bracket_for(0), ChargeBracket::Full);
        assert_eq!(policy.bracket_for(-30), ChargeBracket::Full);
    }

    #[test]
    fn test_no_payment_intent_is_not_applicable() {
        for days in [-3, 0, 2, 10] {
            let mut c = ctx(200.0, days);
            c.has_payment_intent = false;
            let result = compute_cancellation_fee(&c);
            assert_eq!(result.cancellation_fee, 0.0);
            assert_eq!(result.refund_amount, 0.0);
            assert_eq!(result.charge_percentage, 0);
            assert_eq!(result.outcome, CancellationOutcome::NotApplicable);
            assert!(!result.is_applicable());
        }
    }

    #[test]
    fn test_pending_booking_is_not_applicable() {
        let mut c = ctx(200.0, 0);
        c.is_pending = true;
        let result = compute_cancellation_fee(&c);
        assert_eq!(result.outcome, CancellationOutcome::NotApplicable);
        assert_eq!(result.cancellation_fee, 0.0);
    }

    #[test]
    fn test_waived_keeps_policy_percentage() {
        let result = compute_cancellation_fee_waived(&ctx(200.0, 2));
        assert_eq!(result.charge_percentage, 0);
        assert_eq!(result.policy_charge_percentage, 50);
        assert_eq!(result.cancellation_fee, 0.0);
        assert_eq!(result.refund_amount, 200.0);
        assert_eq!(result.outcome, CancellationOutcome::Waived);
        assert!(result.message.starts_with("Annulation à J-2 : 50%"));
    }

    #[test]
    fn test_fee_rounds_before_refund() {
        let result = compute_cancellation_fee(&ctx(99.99, 3));
        assert_eq!(result.cancellation_fee, 50.0);
        assert_eq!(result.refund_amount, 49.99);
    }

    #[test]
    fn test_negative_deposit_clamped() {
        let result = compute_cancellation_fee(&ctx(-50.0, 0));
        assert_eq!(result.cancellation_fee, 0.0);
        assert_eq!(result.refund_amount, 0.0);
    }

    #[test]
    fn test_custom_policy() {
        let policy = CancellationPolicy {
            free_cancellation_days: 14,
            partial_charge_min_days: 2,
            partial_charge_percent: 30,
        };
        let calc = CancellationCalculator::new(policy).unwrap();

        let result = calc.compute(&ctx(100.0, 10));
        assert_eq!(result.charge_percentage, 30);
        assert_eq!(result.cancellation_fee, 30.0);

        let result = calc.compute(&ctx(100.0, 1));
        assert_eq!(result.charge_percentage, 100);
    }

    #[test]
    fn test_policy_validation() {
        let inverted = CancellationPolicy {
            free_cancellation_days: 1,
            partial_charge_min_days: 3,
            partial_charge_percent: 50,
        };
        assert!(inverted.validate().is_err());

        let too_much = CancellationPolicy {
            partial_charge_percent: 120,
            ..CancellationPolicy::default()
        };
        assert!(too_much.validate().is_err());
    }

    #[test]
    fn test_calculator_rejects_invalid_policy() {
        let over_full = CancellationPolicy {
            partial_charge_percent: 150,
            ..CancellationPolicy::default()
        };
        assert!(matches!(
            CancellationCalculator::new(over_full),
            Err(PricingError::InvalidConfig { .. })
        ));
        assert!(CancellationCalculator::new(CancellationPolicy::default()).is_ok());
    }

    #[test]
    fn test_oversized_deposit_is_not_zeroed() {
        let result = compute_cancellation_fee(&ctx(1e30, 2));
        assert!(result.cancellation_fee > 0.0);
        assert!(result.refund_amount > 0.0);

        let result = compute_cancellation_fee(&ctx(1e28, 0));
        assert_eq!(result.charge_percentage, 100);
        assert_eq!(result.refund_amount, 0.0);
    }
}
