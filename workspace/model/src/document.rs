//! Provider document shapes.
//!
//! The agency's JSON has no published schema and omits fields freely, so
//! every field here is optional or defaulted. Structural requirements are
//! checked later, in [`crate::dataset`].

use serde::{Deserialize, Deserializer};
use tracing::{debug, trace};

use crate::error::Result;

/// The fetched document: one dataset per forecast horizon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ForecastDocument {
    /// `null` entries stay in place so indices keep matching horizons
    pub datasets: Vec<Option<ForecastDataset>>,
}

impl ForecastDocument {
    /// Parses a response body. Anything but a JSON array of objects fails.
    pub fn from_json(body: &str) -> Result<Self> {
        trace!("Parsing forecast document ({} bytes)", body.len());
        let document: ForecastDocument = serde_json::from_str(body)?;
        debug!("Parsed forecast document with {} datasets", document.datasets.len());
        Ok(document)
    }

    pub fn dataset(&self, index: usize) -> Option<&ForecastDataset> {
        self.datasets.get(index).and_then(Option::as_ref)
    }
}

/// A list the provider may send as `null`, read as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDataset {
    #[serde(default)]
    pub publishing_office: Option<String>,
    #[serde(default)]
    pub report_datetime: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_series: Vec<Option<TimeSeriesBlock>>,
}

impl ForecastDataset {
    /// Time-series block at `index`; `null` blocks count as absent.
    pub fn block(&self, index: usize) -> Option<&TimeSeriesBlock> {
        self.time_series.get(index).and_then(Option::as_ref)
    }
}

/// One group of per-instant values sharing `timeDefines`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesBlock {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_defines: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub areas: Vec<AreaEntry>,
}

impl TimeSeriesBlock {
    /// Linear lookup by exact area name.
    pub fn area_named(&self, name: &str) -> Option<&AreaEntry> {
        self.areas.iter().find(|a| a.name() == Some(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AreaRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// One area's parallel sequences, aligned by index to `timeDefines`.
///
/// Any sequence may be shorter than `timeDefines`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaEntry {
    #[serde(default)]
    pub area: Option<AreaRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub weathers: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub winds: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub waves: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pops: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reliabilities: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub temps_min: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub temps_max: Vec<Option<String>>,
}

/// Value at `index`, treating out-of-range, `null` and empty strings as absent.
fn value_at(values: &[Option<String>], index: usize) -> Option<&str> {
    values
        .get(index)
        .and_then(Option::as_deref)
        .filter(|v| !v.is_empty())
}

impl AreaEntry {
    pub fn name(&self) -> Option<&str> {
        self.area
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    pub fn weather_at(&self, index: usize) -> Option<&str> {
        value_at(&self.weathers, index)
    }

    pub fn wind_at(&self, index: usize) -> Option<&str> {
        value_at(&self.winds, index)
    }

    pub fn wave_at(&self, index: usize) -> Option<&str> {
        value_at(&self.waves, index)
    }

    pub fn pop_at(&self, index: usize) -> Option<&str> {
        value_at(&self.pops, index)
    }

    pub fn reliability_at(&self, index: usize) -> Option<&str> {
        value_at(&self.reliabilities, index)
    }

    pub fn temp_min_at(&self, index: usize) -> Option<&str> {
        value_at(&self.temps_min, index)
    }

    pub fn temp_max_at(&self, index: usize) -> Option<&str> {
        value_at(&self.temps_max, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "publishingOffice": "大阪管区気象台",
            "reportDatetime": "2025-11-07T11:00:00+09:00",
            "timeSeries": [
                {
                    "timeDefines": ["2025-11-07T11:00:00+09:00", "2025-11-08T00:00:00+09:00"],
                    "areas": [
                        {
                            "area": { "name": "大阪府", "code": "270000" },
                            "weatherCodes": ["100", "101"],
                            "weathers": ["晴れ"],
                            "winds": ["北の風", "北の風　後　南の風"],
                            "waves": ["０．５メートル", ""]
                        }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let doc = ForecastDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.datasets.len(), 1);
        let dataset = doc.dataset(0).unwrap();
        assert_eq!(dataset.publishing_office.as_deref(), Some("大阪管区気象台"));
        assert_eq!(dataset.block(0).unwrap().time_defines.len(), 2);
        assert!(dataset.block(1).is_none());
        assert!(doc.dataset(1).is_none());
    }

    #[test]
    fn test_accessors_treat_short_and_empty_sequences_as_absent() {
        let doc = ForecastDocument::from_json(SAMPLE).unwrap();
        let area = &doc.dataset(0).unwrap().block(0).unwrap().areas[0];
        assert_eq!(area.name(), Some("大阪府"));
        assert_eq!(area.weather_at(0), Some("晴れ"));
        assert_eq!(area.weather_at(1), None);
        assert_eq!(area.wave_at(1), None);
        assert_eq!(area.pop_at(0), None);
    }

    #[test]
    fn test_missing_area_name() {
        let area = AreaEntry::default();
        assert_eq!(area.name(), None);

        let area: AreaEntry = serde_json::from_str(r#"{"area": {"code": "1"}}"#).unwrap();
        assert_eq!(area.name(), None);
    }

    #[test]
    fn test_area_lookup_is_exact() {
        let block: TimeSeriesBlock = serde_json::from_str(
            r#"{"areas": [{"area": {"name": "大阪"}}, {"area": {"name": "大阪府"}}]}"#,
        )
        .unwrap();
        assert!(block.area_named("大阪府").is_some());
        assert!(block.area_named("大阪 ").is_none());
        assert!(block.area_named("おおさか").is_none());
    }

    #[test]
    fn test_null_values_read_as_absent() {
        let doc = ForecastDocument::from_json(
            r#"[
                {"publishingOffice": null, "timeSeries": null},
                null,
                {"timeSeries": [null, {"timeDefines": null, "areas": [
                    {"area": {"name": null}, "weathers": ["晴れ", null], "pops": null}
                ]}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(doc.datasets.len(), 3);
        let first = doc.dataset(0).unwrap();
        assert_eq!(first.publishing_office, None);
        assert!(first.time_series.is_empty());
        assert!(doc.dataset(1).is_none());

        let third = doc.dataset(2).unwrap();
        assert!(third.block(0).is_none());
        let block = third.block(1).unwrap();
        assert!(block.time_defines.is_empty());
        let area = &block.areas[0];
        assert_eq!(area.name(), None);
        assert_eq!(area.weather_at(0), Some("晴れ"));
        assert_eq!(area.weather_at(1), None);
        assert_eq!(area.pop_at(0), None);
    }

    #[test]
    fn test_non_array_document_is_malformed() {
        let err = ForecastDocument::from_json(r#"{"timeSeries": []}"#).unwrap_err();
        assert!(!err.is_missing_data());
        assert!(ForecastDocument::from_json("not json").is_err());
    }
}
