//! Dashboard selection state (region, language, anomaly filter).
//!
//! DESIGN
//! ======
//! Selections are closed enums, so every value the controls can produce is a
//! valid catalog key. Each setter touches exactly one field; panels derive
//! everything else from the catalog on render.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use catalog::{AnomalyFilter, Language, Region};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub region: Region,
    pub language: Language,
    pub anomaly_filter: AnomalyFilter,
}

impl UiState {
    /// Apply a region select value. Unknown codes leave the state unchanged.
    pub fn select_region(&mut self, code: &str) -> bool {
        match Region::from_code(code) {
            Some(region) => {
                self.region = region;
                true
            }
            None => false,
        }
    }

    /// Apply a language select value. Unknown codes leave the state unchanged.
    pub fn select_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => {
                self.language = language;
                true
            }
            None => false,
        }
    }
}
