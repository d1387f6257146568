//! Booking lifecycle hooks
//!
//! Side computations the booking layer runs on `create`/`update` and on
//! `cancel`. The status machine itself lives with the bookings.

use shared::models::{
    BookingStatus, CancellationContext, CancellationFeeResult, PriceResult, ReservationRequest,
    SpacePricingConfig,
};

use super::cancellation::CancellationCalculator;
use super::error::{PricingError, PricingResult};
use super::validation::{validate_cancellation_context, verify_submitted_price};

/// Amount to persist for a created or updated booking.
///
/// `None` means the space is quote-only and the amount is set later by an admin.
pub fn price_for_persistence(
    config: Option<&SpacePricingConfig>,
    request: &ReservationRequest,
    submitted: Option<f64>,
) -> PricingResult<Option<f64>> {
    let result = verify_submitted_price(config, request, submitted)?;
    Ok(match result {
        PriceResult::Priced(breakdown) => Some(breakdown.total_price),
        _ => None,
    })
}

/// Fee plan for cancelling a booking in `status`.
///
/// Only a confirmed booking with a deposit hold is charged; a pending booking
/// is not applicable whatever its context says.
pub fn plan_cancellation(
    status: BookingStatus,
    ctx: &CancellationContext,
    skip_capture: bool,
    calculator: &CancellationCalculator,
) -> PricingResult<CancellationFeeResult> {
    if !status.can_transition_to(BookingStatus::Cancelled) {
        return Err(PricingError::InvalidTransition {
            from: status,
            to: BookingStatus::Cancelled,
        });
    }
    validate_cancellation_context(ctx)?;

    let ctx = CancellationContext {
        is_pending: ctx.is_pending || status == BookingStatus::Pending,
        ..ctx.clone()
    };

    let result = if skip_capture {
        calculator.compute_waived(&ctx)
    } else {
        calculator.compute(&ctx)
    };

    tracing::info!(
        status = %status,
        outcome = ?result.outcome,
        days_until_booking = result.days_until_booking,
        fee = result.cancellation_fee,
        "Cancellation planned"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::CancellationOutcome;

    fn ctx() -> CancellationContext {
        CancellationContext {
            deposit_amount: 200.0,
            booking_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            evaluation_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            has_payment_intent: true,
            is_pending: false,
        }
    }

    #[test]
    fn test_price_for_persistence() {
        let config = SpacePricingConfig {
            hourly_rate: 10.0,
            per_person: true,
            ..SpacePricingConfig::new("open-space")
        };
        let req = ReservationRequest::hourly("open-space", "09:00", "12:00", 3);
        assert_eq!(
            price_for_persistence(Some(&config), &req, Some(90.0)),
            Ok(Some(90.0))
        );

        let quote = SpacePricingConfig {
            requires_quote: true,
            ..SpacePricingConfig::new("evenementiel")
        };
        let req = ReservationRequest::hourly("evenementiel", "09:00", "12:00", 3);
        assert_eq!(price_for_persistence(Some(&quote), &req, None), Ok(None));
    }

    #[test]
    fn test_confirmed_booking_is_charged() {
        let calc = CancellationCalculator::default();
        let result = plan_cancellation(BookingStatus::Confirmed, &ctx(), false, &calc).unwrap();
        assert_eq!(result.outcome, CancellationOutcome::Charged);
        assert_eq!(result.cancellation_fee, 100.0);

        let waived = plan_cancellation(BookingStatus::Confirmed, &ctx(), true, &calc).unwrap();
        assert_eq!(waived.outcome, CancellationOutcome::Waived);
        assert_eq!(waived.refund_amount, 200.0);
    }

    #[test]
    fn test_pending_booking_is_not_charged() {
        let calc = CancellationCalculator::default();
        let result = plan_cancellation(BookingStatus::Pending, &ctx(), false, &calc).unwrap();
        assert_eq!(result.outcome, CancellationOutcome::NotApplicable);
        assert_eq!(result.cancellation_fee, 0.0);
    }

    #[test]
    fn test_terminal_booking_cannot_be_cancelled() {
        let calc = CancellationCalculator::default();
        for status in [BookingStatus::Cancelled, BookingStatus::Completed] {
            assert_eq!(
                plan_cancellation(status, &ctx(), false, &calc),
                Err(PricingError::InvalidTransition {
                    from: status,
                    to: BookingStatus::Cancelled
                })
            );
        }
    }

    #[test]
    fn test_invalid_deposit_rejected() {
        let calc = CancellationCalculator::default();
        let bad = CancellationContext {
            deposit_amount: -10.0,
            ..ctx()
        };
        assert!(matches!(
            plan_cancellation(BookingStatus::Confirmed, &bad, false, &calc),
            Err(PricingError::InvalidAmount { .. })
        ));
    }
}
