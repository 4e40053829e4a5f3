//! Scrolling alert line shown under the header.
//!
//! The message is cosmetic: the district comes from the head of the anomaly
//! list, not from any threshold over the charted values.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use crate::locale::{LabelKey, LabelSet};
use crate::region::{Region, RegionDataset};

/// District named for the national aggregate and for regions without
/// anomaly records.
pub const NATIONAL_HOTSPOT: &str = "Muzaffarpur";

/// Advertised system load, in percent.
pub const SYSTEM_LOAD_PERCENT: u8 = 89;

#[must_use]
pub fn hotspot_district(region: Region, dataset: &RegionDataset) -> &str {
    if region.is_national() {
        return NATIONAL_HOTSPOT;
    }
    dataset.anomalies.first().map_or(NATIONAL_HOTSPOT, |record| record.district.as_str())
}

/// Fill the `{district}` and `{load}` slots of the active ticker template.
#[must_use]
pub fn ticker_message(region: Region, dataset: &RegionDataset, labels: &LabelSet) -> String {
    labels
        .get(LabelKey::Ticker)
        .replace("{district}", hotspot_district(region, dataset))
        .replace("{load}", &SYSTEM_LOAD_PERCENT.to_string())
}
