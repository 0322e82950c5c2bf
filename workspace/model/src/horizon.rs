use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two bundled provider datasets to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastHorizon {
    /// Today and tomorrow: weather, wind and wave per area
    #[default]
    #[serde(rename = "short", alias = "0")]
    ShortTerm,
    /// Multi-day: weather, precipitation probability, reliability, temperatures
    #[serde(alias = "1")]
    Weekly,
}

impl ForecastHorizon {
    /// All horizons in display order; the first is pre-selected.
    pub const ALL: [ForecastHorizon; 2] = [ForecastHorizon::ShortTerm, ForecastHorizon::Weekly];

    /// Index into the top-level array of the provider document.
    pub fn dataset_index(self) -> usize {
        match self {
            ForecastHorizon::ShortTerm => 0,
            ForecastHorizon::Weekly => 1,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ForecastHorizon::ShortTerm => "short",
            ForecastHorizon::Weekly => "weekly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForecastHorizon::ShortTerm => "短期予報 (今日〜明日)",
            ForecastHorizon::Weekly => "週間予報 (明日以降)",
        }
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ForecastHorizon {
    type Err = String;

    /// Accepts the horizon id or its dataset index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" | "0" => Ok(ForecastHorizon::ShortTerm),
            "weekly" | "1" => Ok(ForecastHorizon::Weekly),
            other => Err(format!("unknown forecast horizon: {}", other)),
        }
    }
}
