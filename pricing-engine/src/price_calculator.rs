//! Reservation Price Calculator
//!
//! Computes a reservation's total from a space's pricing configuration:
//! - Quote-only spaces short-circuit to `QuoteRequired`
//! - Daily/weekly/monthly kinds: `<kind>Rate × numberOfPeople`
//! - Capacity tiers (hourly, or flat daily from the tier threshold, plus extra people)
//! - Per-person daily rate above `maxHoursBeforeDaily`
//! - Simple hourly rate (optionally per person)
//!
//! Uses rust_decimal for precise calculations; rounds to cents only on output.

use rust_decimal::prelude::*;
use shared::models::{
    InputIssue, PriceBreakdown, PriceResult, PricingMode, PricingTier, ReservationRequest,
    ReservationType, SpacePricingConfig,
};

use super::duration::ReservationSpan;
use super::money::{checked_decimal, to_decimal, to_f64};
use super::tier::select_tier;

/// Hours from which a tier's flat daily rate replaces hourly accumulation.
///
/// Independent from `maxHoursBeforeDaily`; a space may override it with
/// `tierDailyThresholdHours`.
pub const TIER_DAILY_THRESHOLD_HOURS: u32 = 5;

/// Compute the price of a reservation for a known space.
///
/// Never fails: malformed times price as zero duration and are reported in
/// `PriceBreakdown::issues`. A total beyond the monetary range is capped and
/// flagged with [`InputIssue::AmountOverflow`].
pub fn compute_price(config: &SpacePricingConfig, request: &ReservationRequest) -> PriceResult {
    if config.requires_quote {
        tracing::debug!(space_type = %config.space_type, "Space requires a quote");
        return PriceResult::QuoteRequired;
    }

    let mut issues = Vec::new();
    if request.number_of_people == 0 {
        issues.push(InputIssue::ZeroPeople);
    }

    let breakdown = match request.reservation_type {
        ReservationType::Hourly => price_time_range(config, request, issues),
        kind => price_by_kind(config, kind, request.number_of_people, issues),
    };

    tracing::debug!(
        space_type = %config.space_type,
        mode = ?breakdown.mode,
        duration_hours = breakdown.duration_hours,
        people = request.number_of_people,
        total = breakdown.total_price,
        "Reservation priced"
    );

    PriceResult::Priced(breakdown)
}

/// Compute the price for a space looked up by the caller.
///
/// A lookup miss yields `ConfigMissing`, never a zero price.
pub fn price_reservation(
    config: Option<&SpacePricingConfig>,
    request: &ReservationRequest,
) -> PriceResult {
    match config {
        Some(config) => compute_price(config, request),
        None => {
            tracing::warn!(space_type = %request.space_type, "No pricing config for space");
            PriceResult::ConfigMissing {
                space_type: request.space_type.clone(),
            }
        }
    }
}

/// Daily/weekly/monthly reservations: rate × headcount, no time math
fn price_by_kind(
    config: &SpacePricingConfig,
    kind: ReservationType,
    people: u32,
    issues: Vec<InputIssue>,
) -> PriceBreakdown {
    let (rate, mode) = match kind {
        ReservationType::Daily => (config.daily_rate, PricingMode::Daily),
        ReservationType::Weekly => (config.weekly_rate, PricingMode::Weekly),
        ReservationType::Monthly => (config.monthly_rate, PricingMode::Monthly),
        ReservationType::Hourly => (config.hourly_rate, PricingMode::Hourly),
    };
    let total = checked_decimal(rate).and_then(|rate| rate.checked_mul(Decimal::from(people)));

    breakdown(total, Decimal::ZERO, mode, 0, issues)
}

/// Hourly reservations over a wall-clock range
fn price_time_range(
    config: &SpacePricingConfig,
    request: &ReservationRequest,
    mut issues: Vec<InputIssue>,
) -> PriceBreakdown {
    let span = ReservationSpan::between(&request.start_time, &request.end_time);
    let people = request.number_of_people;

    if span.malformed {
        tracing::warn!(
            start_time = %request.start_time,
            end_time = %request.end_time,
            "Malformed reservation time, pricing as zero duration"
        );
        issues.push(InputIssue::MalformedTime);
    } else if span.is_empty() {
        issues.push(InputIssue::ZeroDuration);
    }

    let default_mode = if config.has_tiers() {
        PricingMode::TierHourly
    } else {
        PricingMode::Hourly
    };
    if span.is_empty() {
        return breakdown(Some(Decimal::ZERO), Decimal::ZERO, default_mode, 0, issues);
    }

    let hours = span.hours();

    // Step 1: Capacity tiers take precedence
    if let Some(tier_match) = select_tier(&config.tiers, people) {
        let threshold = config
            .tier_daily_threshold_hours
            .map(to_decimal)
            .unwrap_or_else(|| Decimal::from(TIER_DAILY_THRESHOLD_HOURS));
        let extra = Decimal::from(tier_match.extra_people);

        let (total, mode) = if hours >= threshold {
            (tier_daily_total(tier_match.tier, extra), PricingMode::TierDaily)
        } else {
            (
                tier_hourly_total(tier_match.tier, extra, hours),
                PricingMode::TierHourly,
            )
        };

        return breakdown(total, hours, mode, tier_match.extra_people, issues);
    }

    // Step 2: Per-person daily rate once the threshold is exceeded
    if let Some(max_hours) = config.max_hours_before_daily
        && hours > to_decimal(max_hours)
    {
        let total = checked_decimal(config.daily_rate_per_person.unwrap_or_default())
            .and_then(|rate| rate.checked_mul(Decimal::from(people)));
        return breakdown(total, hours, PricingMode::PerPersonDaily, 0, issues);
    }

    // Step 3: Simple hourly rate
    let headcount = if config.per_person {
        Decimal::from(people)
    } else {
        Decimal::ONE
    };
    let total = checked_decimal(config.hourly_rate)
        .and_then(|rate| rate.checked_mul(hours))
        .and_then(|total| total.checked_mul(headcount));
    breakdown(total, hours, PricingMode::Hourly, 0, issues)
}

/// Flat tier daily rate plus extra people at their daily rate
fn tier_daily_total(tier: &PricingTier, extra: Decimal) -> Option<Decimal> {
    let extra_rate = checked_decimal(tier.extra_person_daily.unwrap_or_default())?;
    checked_decimal(tier.daily_rate)?.checked_add(extra.checked_mul(extra_rate)?)
}

/// Tier hourly rate plus extra people at their hourly rate, times duration
fn tier_hourly_total(tier: &PricingTier, extra: Decimal, hours: Decimal) -> Option<Decimal> {
    let extra_rate = checked_decimal(tier.extra_person_hourly.unwrap_or_default())?;
    let base = checked_decimal(tier.hourly_rate)?.checked_mul(hours)?;
    let extras = extra.checked_mul(extra_rate)?.checked_mul(hours)?;
    base.checked_add(extras)
}

/// `None` total means the arithmetic left Decimal's range
fn breakdown(
    total: Option<Decimal>,
    hours: Decimal,
    mode: PricingMode,
    extra_people: u32,
    mut issues: Vec<InputIssue>,
) -> PriceBreakdown {
    let total = total.unwrap_or_else(|| {
        tracing::warn!(?mode, "Price exceeds the monetary range, capping total");
        issues.push(InputIssue::AmountOverflow);
        Decimal::MAX
    });
    PriceBreakdown {
        total_price: to_f64(total.max(Decimal::ZERO)),
        duration_hours: to_f64(hours),
        mode,
        extra_people,
        issues,
    }
}
