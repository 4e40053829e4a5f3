use super::*;
use crate::locale::Language;
use crate::{Catalog, DashboardSource};

#[test]
fn national_ticker_names_fixed_hotspot() {
    let catalog = Catalog::builtin().unwrap();
    let message = ticker_message(Region::India, catalog.dataset(Region::India), catalog.labels(Language::En));
    assert_eq!(
        message,
        "⚠️ High biometric failures in Muzaffarpur. System load at 89%. 🟢 Aadhaar Server Active."
    );
}

#[test]
fn regional_ticker_uses_first_anomaly_district() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(hotspot_district(Region::Bihar, catalog.dataset(Region::Bihar)), "Darbhanga");
    assert_eq!(hotspot_district(Region::UttarPradesh, catalog.dataset(Region::UttarPradesh)), "Bijnor");
    let message = ticker_message(Region::Bihar, catalog.dataset(Region::Bihar), catalog.labels(Language::Hi));
    assert!(message.contains("Darbhanga"));
    assert!(message.contains("89%"));
    assert!(!message.contains('{'));
}

#[test]
fn region_without_anomalies_falls_back_to_hotspot() {
    assert_eq!(hotspot_district(Region::Delhi, &RegionDataset::default()), NATIONAL_HOTSPOT);
}

#[test]
fn missing_template_yields_empty_message() {
    let message = ticker_message(Region::Delhi, &RegionDataset::default(), &LabelSet::default());
    assert!(message.is_empty());
}
