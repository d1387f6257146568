//! Space Pricing Model

use serde::{Deserialize, Serialize};

/// Capacity band (tarif par tranche de personnes)
///
/// `min_people..=max_people` is inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub min_people: u32,
    pub max_people: u32,
    pub hourly_rate: f64,
    /// Flat rate once the tier daily threshold is reached (not multiplied)
    pub daily_rate: f64,
    /// Hourly surcharge per person above the last tier's `max_people`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_person_hourly: Option<f64>,
    /// Daily surcharge per person above the last tier's `max_people`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_person_daily: Option<f64>,
}

impl PricingTier {
    pub fn new(min_people: u32, max_people: u32, hourly_rate: f64, daily_rate: f64) -> Self {
        Self {
            min_people,
            max_people,
            hourly_rate,
            daily_rate,
            extra_person_hourly: None,
            extra_person_daily: None,
        }
    }

    pub fn with_extra_person(mut self, hourly: f64, daily: f64) -> Self {
        self.extra_person_hourly = Some(hourly);
        self.extra_person_daily = Some(daily);
        self
    }

    /// Whether `people` falls inside this band
    pub fn contains(&self, people: u32) -> bool {
        (self.min_people..=self.max_people).contains(&people)
    }
}

/// Pricing configuration of a bookable space
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacePricingConfig {
    /// Unique key, e.g. "open-space", "salle-reunion", "evenementiel"
    #[serde(default)]
    pub space_type: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub daily_rate: f64,
    #[serde(default)]
    pub weekly_rate: f64,
    #[serde(default)]
    pub monthly_rate: f64,
    /// Hourly rate multiplies by headcount
    #[serde(default)]
    pub per_person: bool,
    /// Above this many hours, switch to `daily_rate_per_person`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hours_before_daily: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate_per_person: Option<f64>,
    /// Capacity bands, ascending by `min_people`; take precedence when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<PricingTier>,
    /// Hours from which a tier's flat daily rate applies (default 5h)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_daily_threshold_hours: Option<f64>,
    /// Priced by manual quote only ("Sur devis")
    #[serde(default)]
    pub requires_quote: bool,
}

impl SpacePricingConfig {
    pub fn new(space_type: impl Into<String>) -> Self {
        Self {
            space_type: space_type.into(),
            ..Default::default()
        }
    }

    pub fn has_tiers(&self) -> bool {
        !self.tiers.is_empty()
    }
}
