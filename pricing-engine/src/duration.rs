//! Reservation Duration
//!
//! Lenient wall-clock parsing for live price previews. Malformed input
//! degrades to a zero-length span instead of failing.

use rust_decimal::Decimal;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse "HH:MM" into minutes since midnight.
///
/// Hours above 23 are accepted ("26:00" is 02:00 the next day); minutes
/// must stay below 60. Returns `None` for a wrong segment count, non-numeric
/// parts or out-of-range minutes.
pub fn parse_clock(value: &str) -> Option<u32> {
    let mut parts = value.trim().split(':');
    let hours = parts.next()?.trim();
    let minutes = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes > 59 {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Time span of a reservation after midnight rollover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationSpan {
    pub minutes: u32,
    /// End time was at or before start time; 24h were added
    pub crosses_midnight: bool,
    /// Start or end time could not be parsed
    pub malformed: bool,
}

impl ReservationSpan {
    /// Span between two wall-clock times.
    ///
    /// `end <= start` means the reservation crosses midnight. A span that is
    /// still negative after rollover is clamped to zero.
    pub fn between(start_time: &str, end_time: &str) -> Self {
        let (Some(start), Some(end)) = (parse_clock(start_time), parse_clock(end_time)) else {
            return Self {
                minutes: 0,
                crosses_midnight: false,
                malformed: true,
            };
        };

        let crosses_midnight = end <= start;
        let end = if crosses_midnight {
            end.saturating_add(MINUTES_PER_DAY)
        } else {
            end
        };

        Self {
            minutes: end.saturating_sub(start),
            crosses_midnight,
            malformed: false,
        }
    }

    /// Duration in hours at full precision
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.minutes) / Decimal::from(60)
    }

    pub fn is_empty(&self) -> bool {
        self.minutes == 0
    }
}
