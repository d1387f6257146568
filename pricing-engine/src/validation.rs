//! Submission Validation
//!
//! Strict checks run before anything is persisted. The preview calculators
//! stay lenient; these reject malformed input with a [`PricingError`].

use chrono::NaiveTime;
use shared::models::{
    CancellationContext, PriceResult, ReservationRequest, ReservationType, SpacePricingConfig,
};

use super::error::{PricingError, PricingResult};
use super::money::{MAX_AMOUNT, same_cents};
use super::price_calculator::price_reservation;

const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a strict "HH:MM" (00:00 to 23:59)
fn parse_strict_time(field: &'static str, value: &str) -> PricingResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).map_err(|_| {
        PricingError::MalformedTime {
            field,
            value: value.to_string(),
        }
    })
}

/// Finite, non-negative and at most [`MAX_AMOUNT`]
fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_AMOUNT).contains(&value)
}

fn require_amount(field: &'static str, value: f64) -> PricingResult<()> {
    if !is_valid_amount(value) {
        return Err(PricingError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Validate a reservation before submission
pub fn validate_reservation_request(req: &ReservationRequest) -> PricingResult<()> {
    if req.space_type.trim().is_empty() {
        return Err(PricingError::MissingSpaceType);
    }
    if req.number_of_people < 1 {
        return Err(PricingError::InvalidHeadcount(req.number_of_people));
    }

    if req.reservation_type == ReservationType::Hourly {
        let start = parse_strict_time("startTime", &req.start_time)?;
        let end = parse_strict_time("endTime", &req.end_time)?;
        // Identical times would roll over to a full day; a submission must be explicit
        if start == end {
            return Err(PricingError::NonPositiveDuration {
                start: req.start_time.clone(),
                end: req.end_time.clone(),
            });
        }
    }

    Ok(())
}

/// Validate cancellation input
pub fn validate_cancellation_context(ctx: &CancellationContext) -> PricingResult<()> {
    require_amount("depositAmount", ctx.deposit_amount)
}

/// Validate a space pricing configuration before the catalog accepts it
pub fn validate_space_config(config: &SpacePricingConfig) -> PricingResult<()> {
    if config.space_type.trim().is_empty() {
        return Err(PricingError::MissingSpaceType);
    }

    let invalid = |reason: String| PricingError::InvalidConfig {
        space_type: config.space_type.clone(),
        reason,
    };

    for (field, value) in [
        ("hourlyRate", config.hourly_rate),
        ("dailyRate", config.daily_rate),
        ("weeklyRate", config.weekly_rate),
        ("monthlyRate", config.monthly_rate),
    ] {
        if !is_valid_amount(value) {
            return Err(invalid(format!(
                "{field} must be between 0 and {MAX_AMOUNT}, got {value}"
            )));
        }
    }
    for (field, value) in [
        ("maxHoursBeforeDaily", config.max_hours_before_daily),
        ("dailyRatePerPerson", config.daily_rate_per_person),
        ("tierDailyThresholdHours", config.tier_daily_threshold_hours),
    ] {
        if let Some(value) = value
            && !is_valid_amount(value)
        {
            return Err(invalid(format!(
                "{field} must be between 0 and {MAX_AMOUNT}, got {value}"
            )));
        }
    }

    validate_tiers(config)
}

/// Tiers: `min <= max`, ascending `minPeople`, no overlap, rates within range
fn validate_tiers(config: &SpacePricingConfig) -> PricingResult<()> {
    let invalid = |reason: String| PricingError::InvalidTierRange {
        space_type: config.space_type.clone(),
        reason,
    };

    for (i, tier) in config.tiers.iter().enumerate() {
        if tier.min_people > tier.max_people {
            return Err(invalid(format!(
                "tier {i}: minPeople {} > maxPeople {}",
                tier.min_people, tier.max_people
            )));
        }
        let rates = [
            Some(tier.hourly_rate),
            Some(tier.daily_rate),
            tier.extra_person_hourly,
            tier.extra_person_daily,
        ];
        if rates
            .into_iter()
            .flatten()
            .any(|rate| !is_valid_amount(rate))
        {
            return Err(invalid(format!(
                "tier {i}: rates must be between 0 and {MAX_AMOUNT}"
            )));
        }
    }

    for (i, pair) in config.tiers.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.min_people <= prev.max_people {
            return Err(invalid(format!(
                "tier {} ({}-{}) overlaps or precedes tier {i} ({}-{})",
                i + 1,
                next.min_people,
                next.max_people,
                prev.min_people,
                prev.max_people
            )));
        }
    }

    Ok(())
}

/// Recompute the price server-side and compare it with the client preview.
///
/// Returns the authoritative result. A quote-only space accepts no numeric
/// price; any other space requires one matching to the cent.
pub fn verify_submitted_price(
    config: Option<&SpacePricingConfig>,
    req: &ReservationRequest,
    submitted: Option<f64>,
) -> PricingResult<PriceResult> {
    validate_reservation_request(req)?;

    let result = price_reservation(config, req);
    let expected = match &result {
        PriceResult::ConfigMissing { space_type } => {
            return Err(PricingError::ConfigMissing(space_type.clone()));
        }
        PriceResult::QuoteRequired if submitted.is_some() => {
            return Err(PricingError::QuoteRequired(req.space_type.clone()));
        }
        PriceResult::QuoteRequired => None,
        PriceResult::Priced(breakdown) if breakdown.is_overflow() => {
            return Err(PricingError::AmountOverflow(req.space_type.clone()));
        }
        PriceResult::Priced(breakdown) => Some(breakdown.total_price),
    };
    let Some(expected) = expected else {
        return Ok(result);
    };

    let submitted = submitted.unwrap_or(f64::NAN);
    if !submitted.is_finite() || !same_cents(submitted, expected) {
        tracing::warn!(
            space_type = %req.space_type,
            submitted,
            expected,
            "Submitted price does not match server-side computation"
        );
        return Err(PricingError::PriceMismatch {
            submitted,
            expected,
        });
    }
    Ok(result)
}
