use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A rendered forecast, ready to replace whatever was displayed before.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastView {
    /// Publishing office, or "N/A"
    pub publishing_office: String,
    /// Report timestamp as presented, or "N/A"
    pub report_datetime: String,
    /// Horizon id the view was rendered for ("short" or "weekly")
    pub horizon: String,
    /// Forecast instants in provider order
    pub periods: Vec<PeriodEntry>,
    /// One block per area
    pub areas: Vec<AreaView>,
}

/// One entry of the period overview.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PeriodEntry {
    /// 1-based position
    pub sequence: usize,
    /// Timestamp as presented
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AreaView {
    pub name: String,
    /// Exactly one slot per period
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TimeSlot {
    pub sequence: usize,
    pub time: String,
    pub details: SlotDetails,
}

/// Resolved fields of one area at one forecast instant.
///
/// Every field is already display-ready: missing values carry their
/// placeholder and the precipitation probability carries its percent sign.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotDetails {
    ShortTerm {
        weather: String,
        wind: String,
        wave: String,
    },
    Weekly {
        weather: String,
        precipitation_probability: String,
        temp_min: String,
        temp_max: String,
        reliability: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_details_are_tagged() {
        let details = SlotDetails::ShortTerm {
            weather: "晴れ".to_string(),
            wind: "北の風".to_string(),
            wave: "情報なし".to_string(),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["kind"], "short_term");
        assert_eq!(json["weather"], "晴れ");

        let back: SlotDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
    }
}
