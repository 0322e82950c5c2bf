//! Plain-text rendering for terminals.

use common::{ForecastView, SlotDetails};
use std::fmt;

use crate::error::RenderResult;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Renders a result as plain text: the forecast listing, or the message of
/// the failure.
pub fn render_text(result: &RenderResult) -> String {
    TextListing(result).to_string()
}

/// Plain-text form of a render result.
pub struct TextListing<'a>(pub &'a RenderResult);

impl fmt::Display for TextListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(view) => write_view(f, view),
            Err(err) => writeln!(f, "{}", err),
        }
    }
}

fn write_view(out: &mut impl fmt::Write, view: &ForecastView) -> fmt::Result {
    writeln!(out, "📢 発表元: {}", view.publishing_office)?;
    writeln!(out, "📢 発表日時: {}", view.report_datetime)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "🗓️ 予報対象期間 ({}回)", view.periods.len())?;
    for period in &view.periods {
        writeln!(out, "  {}回目: {}", period.sequence, period.time)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    for area in &view.areas {
        writeln!(out, "📍 地域: {}", area.name)?;
        for slot in &area.slots {
            writeln!(out, "  [{}]", slot.time)?;
            match &slot.details {
                SlotDetails::ShortTerm { weather, wind, wave } => {
                    writeln!(out, "    - 天気: {}", weather)?;
                    writeln!(out, "    - 風:   {}", wind)?;
                    writeln!(out, "    - 波:   {}", wave)?;
                }
                SlotDetails::Weekly {
                    weather,
                    precipitation_probability,
                    temp_min,
                    temp_max,
                    reliability,
                } => {
                    writeln!(out, "    - 天気:     {}", weather)?;
                    writeln!(out, "    - 降水確率: {}", precipitation_probability)?;
                    writeln!(out, "    - 気温:     最低 {}°C / 最高 {}°C", temp_min, temp_max)?;
                    writeln!(out, "    - 信頼度:   {}", reliability)?;
                }
            }
        }
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;
    }

    Ok(())
}
