//! Fallback values for absent provider fields.
//!
//! Every placeholder used while extracting a forecast is declared here and
//! nowhere else.

/// Missing publishing office or report timestamp.
pub const NOT_AVAILABLE: &str = "N/A";

/// Missing weather, wind, wave or precipitation probability.
pub const NO_DATA: &str = "情報なし";

/// Area entry without a name.
pub const UNKNOWN_AREA: &str = "地域名不明";

/// Missing temperature or reliability.
pub const NO_VALUE: &str = "---";

/// Resolves an optional field against its placeholder.
pub(crate) fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value.unwrap_or(placeholder).to_string()
}

/// Precipitation probability with its percent sign, or [`NO_DATA`].
pub(crate) fn percent_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => NO_DATA.to_string(),
    }
}
