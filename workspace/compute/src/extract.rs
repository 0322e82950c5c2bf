use common::{AreaView, ForecastView, PeriodEntry, SlotDetails, TimeSlot, format_timestamp};
use model::{AreaEntry, Dataset, TimeSeriesBlock, WeeklyDataset};
use std::str::FromStr;
use tracing::{debug, trace};

use crate::defaults::{
    NO_DATA, NO_VALUE, NOT_AVAILABLE, UNKNOWN_AREA, or_placeholder, percent_or_placeholder,
};

/// How provider timestamps are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    /// `YYYY/MM/DD HH:MM`, falling back to the raw text when unparseable
    #[default]
    Formatted,
    /// Provider text, unchanged
    Raw,
}

impl TimestampStyle {
    pub fn present(self, raw: &str) -> String {
        match self {
            TimestampStyle::Formatted => format_timestamp(raw),
            TimestampStyle::Raw => raw.to_string(),
        }
    }
}

impl FromStr for TimestampStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formatted" => Ok(TimestampStyle::Formatted),
            "raw" => Ok(TimestampStyle::Raw),
            other => Err(format!("unknown timestamp style: {}", other)),
        }
    }
}

/// Builds the display view of a validated dataset.
///
/// Every area gets one slot per entry of `timeDefines`; positions beyond the
/// end of an area's sequences resolve to placeholders.
pub fn extract(dataset: &Dataset<'_>, style: TimestampStyle) -> ForecastView {
    let header = dataset.header();
    let block = dataset.weather();

    let periods: Vec<PeriodEntry> = block
        .time_defines
        .iter()
        .enumerate()
        .map(|(i, time)| PeriodEntry {
            sequence: i + 1,
            time: match time.as_deref().filter(|t| !t.is_empty()) {
                Some(t) => style.present(t),
                None => NO_DATA.to_string(),
            },
        })
        .collect();

    let areas = block
        .areas
        .iter()
        .map(|area| {
            let slots = periods
                .iter()
                .enumerate()
                .map(|(i, period)| TimeSlot {
                    sequence: period.sequence,
                    time: period.time.clone(),
                    details: match dataset {
                        Dataset::ShortTerm(_) => short_term_details(area, i),
                        Dataset::Weekly(weekly) => weekly_details(weekly, area, i),
                    },
                })
                .collect();

            AreaView {
                name: or_placeholder(area.name(), UNKNOWN_AREA),
                slots,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "Extracted {} periods for {} areas ({})",
        periods.len(),
        areas.len(),
        dataset.horizon()
    );

    ForecastView {
        publishing_office: or_placeholder(header.publishing_office, NOT_AVAILABLE),
        report_datetime: header
            .report_datetime
            .map(|t| style.present(t))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        horizon: dataset.horizon().id().to_string(),
        periods,
        areas,
    }
}

fn short_term_details(area: &AreaEntry, i: usize) -> SlotDetails {
    SlotDetails::ShortTerm {
        weather: or_placeholder(area.weather_at(i), NO_DATA),
        wind: or_placeholder(area.wind_at(i), NO_DATA),
        wave: or_placeholder(area.wave_at(i), NO_DATA),
    }
}

fn weekly_details(weekly: &WeeklyDataset<'_>, area: &AreaEntry, i: usize) -> SlotDetails {
    let temps = temperature_area(weekly.temperature, area);

    SlotDetails::Weekly {
        weather: or_placeholder(area.weather_at(i), NO_DATA),
        precipitation_probability: percent_or_placeholder(area.pop_at(i)),
        temp_min: or_placeholder(temps.and_then(|t| t.temp_min_at(i)), NO_VALUE),
        temp_max: or_placeholder(temps.and_then(|t| t.temp_max_at(i)), NO_VALUE),
        reliability: or_placeholder(area.reliability_at(i), NO_VALUE),
    }
}

/// The temperature entry whose name equals `area`'s name exactly.
fn temperature_area<'a>(
    block: Option<&'a TimeSeriesBlock>,
    area: &AreaEntry,
) -> Option<&'a AreaEntry> {
    let name = area.name()?;
    let found = block?.area_named(name);
    if found.is_none() {
        trace!("No temperature entry named {:?}", name);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SHORT_TERM_ONLY, TWO_HORIZONS};
    use model::{ForecastDocument, ForecastHorizon};

    fn view(json: &str, horizon: ForecastHorizon, style: TimestampStyle) -> ForecastView {
        let document = ForecastDocument::from_json(json).unwrap();
        let dataset = document.select(horizon).unwrap();
        extract(&dataset, style)
    }

    #[test]
    fn test_short_sequence_yields_placeholder_at_missing_position() {
        let view = view(SHORT_TERM_ONLY, ForecastHorizon::ShortTerm, TimestampStyle::Formatted);

        assert_eq!(view.periods.len(), 2);
        let area = &view.areas[0];
        assert_eq!(area.slots.len(), 2);
        assert_eq!(
            area.slots[0].details,
            SlotDetails::ShortTerm {
                weather: "晴れ".to_string(),
                wind: "北の風".to_string(),
                wave: "０．５メートル".to_string(),
            }
        );
        assert_eq!(
            area.slots[1].details,
            SlotDetails::ShortTerm {
                weather: "情報なし".to_string(),
                wind: "情報なし".to_string(),
                wave: "情報なし".to_string(),
            }
        );
    }

    #[test]
    fn test_header_and_periods_formatted() {
        let view = view(SHORT_TERM_ONLY, ForecastHorizon::ShortTerm, TimestampStyle::Formatted);
        assert_eq!(view.publishing_office, "大阪管区気象台");
        assert_eq!(view.report_datetime, "2025/11/07 11:00");
        assert_eq!(view.horizon, "short");
        assert_eq!(view.periods[0].sequence, 1);
        assert_eq!(view.periods[0].time, "2025/11/07 11:00");
        assert_eq!(view.periods[1].sequence, 2);
        assert_eq!(view.periods[1].time, "2025/11/08 00:00");
        assert_eq!(view.areas[0].slots[1].time, "2025/11/08 00:00");
    }

    #[test]
    fn test_raw_timestamps_pass_through() {
        let view = view(SHORT_TERM_ONLY, ForecastHorizon::ShortTerm, TimestampStyle::Raw);
        assert_eq!(view.report_datetime, "2025-11-07T11:00:00+09:00");
        assert_eq!(view.periods[0].time, "2025-11-07T11:00:00+09:00");
    }

    #[test]
    fn test_missing_header_and_area_name() {
        let view = view(
            r#"[{"timeSeries": [{"timeDefines": ["not-a-date"], "areas": [{"weathers": ["くもり"]}]}]}]"#,
            ForecastHorizon::ShortTerm,
            TimestampStyle::Formatted,
        );
        assert_eq!(view.publishing_office, "N/A");
        assert_eq!(view.report_datetime, "N/A");
        assert_eq!(view.periods[0].time, "not-a-date");
        assert_eq!(view.areas[0].name, "地域名不明");
    }

    #[test]
    fn test_null_entries_yield_placeholders() {
        let view = view(
            r#"[{"timeSeries": [{
                "timeDefines": ["2025-11-07T11:00:00+09:00", null],
                "areas": [{"area": {"name": "大阪府"}, "weathers": ["晴れ", null], "winds": null}]
            }]}]"#,
            ForecastHorizon::ShortTerm,
            TimestampStyle::Formatted,
        );
        assert_eq!(view.periods[1].time, "情報なし");
        assert_eq!(
            view.areas[0].slots[1].details,
            SlotDetails::ShortTerm {
                weather: "情報なし".to_string(),
                wind: "情報なし".to_string(),
                wave: "情報なし".to_string(),
            }
        );
        assert!(matches!(&view.areas[0].slots[0].details, SlotDetails::ShortTerm { weather, .. } if weather == "晴れ"));
    }

    #[test]
    fn test_weekly_matches_temperatures_by_exact_name() {
        let view = view(TWO_HORIZONS, ForecastHorizon::Weekly, TimestampStyle::Formatted);
        assert_eq!(view.horizon, "weekly");
        assert_eq!(view.periods.len(), 3);

        let osaka = view.areas.iter().find(|a| a.name == "大阪府").unwrap();
        assert_eq!(
            osaka.slots[0].details,
            SlotDetails::Weekly {
                weather: "情報なし".to_string(),
                precipitation_probability: "情報なし".to_string(),
                temp_min: "---".to_string(),
                temp_max: "---".to_string(),
                reliability: "---".to_string(),
            }
        );
        assert_eq!(
            osaka.slots[1].details,
            SlotDetails::Weekly {
                weather: "晴れ".to_string(),
                precipitation_probability: "20%".to_string(),
                temp_min: "12".to_string(),
                temp_max: "21".to_string(),
                reliability: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_weekly_unmatched_name_yields_placeholder_temperatures() {
        let view = view(TWO_HORIZONS, ForecastHorizon::Weekly, TimestampStyle::Formatted);
        let hyogo = view.areas.iter().find(|a| a.name == "兵庫県").unwrap();
        for slot in &hyogo.slots {
            match &slot.details {
                SlotDetails::Weekly { temp_min, temp_max, .. } => {
                    assert_eq!(temp_min, "---");
                    assert_eq!(temp_max, "---");
                }
                other => panic!("expected weekly details, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_every_area_has_one_slot_per_period() {
        for horizon in ForecastHorizon::ALL {
            let view = view(TWO_HORIZONS, horizon, TimestampStyle::Formatted);
            for area in &view.areas {
                assert_eq!(area.slots.len(), view.periods.len());
            }
        }
    }

    #[test]
    fn test_timestamp_style_parse() {
        assert_eq!("raw".parse::<TimestampStyle>(), Ok(TimestampStyle::Raw));
        assert_eq!("Formatted".parse::<TimestampStyle>(), Ok(TimestampStyle::Formatted));
        assert!("iso".parse::<TimestampStyle>().is_err());
    }
}
