//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation kind
///
/// `Hourly` prices the `startTime..endTime` range; the other kinds bypass
/// time-range math and charge `<kind>Rate × numberOfPeople`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationType {
    #[default]
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl ReservationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Price calculation input (never persisted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub space_type: String,
    /// Wall clock "HH:MM"
    #[serde(default)]
    pub start_time: String,
    /// Wall clock "HH:MM"; at or before `start_time` means the range crosses midnight
    #[serde(default)]
    pub end_time: String,
    pub number_of_people: u32,
    #[serde(default)]
    pub reservation_type: ReservationType,
}

impl ReservationRequest {
    /// Hourly reservation over a wall-clock range
    pub fn hourly(
        space_type: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        number_of_people: u32,
    ) -> Self {
        Self {
            space_type: space_type.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            number_of_people,
            reservation_type: ReservationType::Hourly,
        }
    }

    /// Daily/weekly/monthly reservation (no time range)
    pub fn for_kind(
        space_type: impl Into<String>,
        reservation_type: ReservationType,
        number_of_people: u32,
    ) -> Self {
        Self {
            space_type: space_type.into(),
            start_time: String::new(),
            end_time: String::new(),
            number_of_people,
            reservation_type,
        }
    }
}
