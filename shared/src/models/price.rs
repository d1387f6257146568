//! Price Result Model

use serde::{Deserialize, Serialize};

/// Which branch of the calculator produced the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingMode {
    /// Capacity tier, hourly accumulation
    TierHourly,
    /// Capacity tier, flat daily rate
    TierDaily,
    /// Duration above `maxHoursBeforeDaily`: headcount × daily rate per person
    PerPersonDaily,
    /// Hourly rate × duration (× headcount when per person)
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

/// Degraded input detected during a lenient (preview) calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputIssue {
    /// Start or end time is not "HH:MM"; duration treated as zero
    MalformedTime,
    /// Duration is zero after midnight rollover
    ZeroDuration,
    /// `numberOfPeople` is zero
    ZeroPeople,
    /// Total exceeds the representable monetary range; the price is capped
    AmountOverflow,
}

/// Computed price with the context needed to display it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Rounded to 2 decimal places
    pub total_price: f64,
    /// Rounded to 2 decimal places; 0 for daily/weekly/monthly kinds
    pub duration_hours: f64,
    pub mode: PricingMode,
    /// People charged at the extra-person rate (tiered pricing only)
    #[serde(default)]
    pub extra_people: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<InputIssue>,
}

impl PriceBreakdown {
    /// Total was capped because the computation overflowed
    pub fn is_overflow(&self) -> bool {
        self.issues.contains(&InputIssue::AmountOverflow)
    }
}

/// Price calculator output
///
/// `QuoteRequired` and `ConfigMissing` are distinct from a computed price of 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PriceResult {
    Priced(PriceBreakdown),
    /// Space is priced by manual quote ("Tarif sur devis")
    QuoteRequired,
    /// No pricing configuration for the requested space
    #[serde(rename_all = "camelCase")]
    ConfigMissing { space_type: String },
}

impl PriceResult {
    /// Computed total, `None` for quote-required or unknown spaces
    pub fn total_price(&self) -> Option<f64> {
        match self {
            Self::Priced(b) => Some(b.total_price),
            _ => None,
        }
    }

    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        match self {
            Self::Priced(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_quote_required(&self) -> bool {
        matches!(self, Self::QuoteRequired)
    }

    /// Short label for the admin UI
    pub fn display_label(&self) -> String {
        match self {
            Self::Priced(b) => format!("{:.2} €", b.total_price),
            Self::QuoteRequired => "Sur devis".to_string(),
            Self::ConfigMissing { .. } => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_required_serializes_without_price() {
        let json = serde_json::to_value(PriceResult::QuoteRequired).unwrap();
        assert_eq!(json, serde_json::json!({"status": "quoteRequired"}));
        assert_eq!(PriceResult::QuoteRequired.total_price(), None);
        assert_eq!(PriceResult::QuoteRequired.display_label(), "Sur devis");
    }

    #[test]
    fn test_config_missing_serializes_space_type() {
        let result = PriceResult::ConfigMissing {
            space_type: "salle-z".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "configMissing", "spaceType": "salle-z"})
        );
    }

    #[test]
    fn test_priced_flattens_breakdown() {
        let result = PriceResult::Priced(PriceBreakdown {
            total_price: 90.0,
            duration_hours: 3.0,
            mode: PricingMode::Hourly,
            extra_people: 0,
            issues: vec![],
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "priced");
        assert_eq!(json["totalPrice"], 90.0);
        assert_eq!(json["mode"], "hourly");
        assert!(json.get("issues").is_none());

        let back: PriceResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.display_label(), "90.00 €");
    }
}
