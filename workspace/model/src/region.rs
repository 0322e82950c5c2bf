use serde::Serialize;

/// Label shown for the "no selection" entry of the region control.
pub const PLACEHOLDER_LABEL: &str = "--- 地域を選択 ---";

/// A forecast area in the provider's addressing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Human readable name, e.g. "大阪府"
    pub label: &'static str,
    /// Six digit provider code, e.g. "270000"
    pub code: &'static str,
}

const REGIONS: &[Region] = &[
    Region { label: "北海道", code: "010000" },
    Region { label: "青森県", code: "020000" },
    Region { label: "関東地方", code: "130000" },
    Region { label: "愛知県", code: "230000" },
    Region { label: "大阪府", code: "270000" },
    Region { label: "福岡県", code: "400000" },
    Region { label: "沖縄本島地方", code: "471000" },
];

/// Ordered, process-wide catalog of selectable regions.
#[derive(Debug, Clone, Copy)]
pub struct RegionCatalog {
    regions: &'static [Region],
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RegionCatalog {
    /// The catalog offered by the control panel.
    pub const fn standard() -> Self {
        Self { regions: REGIONS }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &'static [Region] {
        self.regions
    }

    pub fn find_by_code(&self, code: &str) -> Option<&'static Region> {
        self.regions.iter().find(|r| r.code == code)
    }

    /// Checks the provider's code format (six ASCII digits).
    ///
    /// Codes outside the catalog are still well formed; the provider decides
    /// whether it publishes a document for them.
    pub fn is_valid_code(code: &str) -> bool {
        code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
    }
}
