use super::*;
use crate::region::RegionField;

fn minimal_region(population: &str) -> serde_json::Value {
    serde_json::json!({
        "population": population,
        "age": [ { "name": "0-5", "value": 1.0, "fill": "#f59e0b" } ],
        "anomalies": [ { "district": "A", "total": 0.5, "kids": 0.4, "adult": 0.1 } ],
        "migration": [ { "district": "A", "updates": 10 } ],
        "gender": [ { "region": "N", "male": 50, "female": 49, "other": 1 } ],
        "efficiency": [ { "district": "A", "wait_time": 5, "process_time": 2 } ],
        "biometric": [ { "age_group": "0-5", "enrolled": 1.0, "saturation": 40 } ],
        "insight": { "en": "e", "hi": "h" }
    })
}

fn all_regions() -> serde_json::Map<String, serde_json::Value> {
    Region::ALL
        .into_iter()
        .map(|region| (region.code().to_owned(), minimal_region("1 Cr")))
        .collect()
}

fn full_labels() -> serde_json::Value {
    let set: serde_json::Map<String, serde_json::Value> = LabelKey::ALL
        .into_iter()
        .map(|key| (key.as_str().to_owned(), serde_json::Value::String(key.as_str().to_owned())))
        .collect();
    serde_json::json!({ "en": set.clone(), "hi": set })
}

fn load(regions: &serde_json::Value, labels: &serde_json::Value) -> Result<Catalog, CatalogError> {
    Catalog::from_json(&regions.to_string(), &labels.to_string(), ACCOUNTS_JSON, NOTICES_JSON)
}

// =============================================================
// Embedded catalog
// =============================================================

#[test]
fn builtin_catalog_loads() {
    assert!(Catalog::builtin().is_ok());
    assert!(shared().is_ok());
}

#[test]
fn builtin_regions_supply_every_chart_category() {
    let catalog = Catalog::builtin().unwrap();
    for region in Region::ALL {
        let dataset = catalog.dataset(region);
        for field in RegionField::ALL {
            assert!(dataset.field_len(field) > 0, "{region} {field}");
        }
        assert!(!dataset.population.is_empty());
        assert!(!dataset.insight.en.is_empty() && !dataset.insight.hi.is_empty());
    }
}

#[test]
fn builtin_label_sets_are_symmetric_and_complete() {
    let catalog = Catalog::builtin().unwrap();
    let en: Vec<LabelKey> = catalog.labels(Language::En).keys().collect();
    let hi: Vec<LabelKey> = catalog.labels(Language::Hi).keys().collect();
    assert_eq!(en, hi);
    assert_eq!(en.len(), LabelKey::ALL.len());
    for panel in Panel::ALL {
        for key in panel.label_keys() {
            assert!(!catalog.labels(Language::Hi).get(*key).is_empty(), "{key}");
        }
    }
}

#[test]
fn builtin_gender_shares_sum_to_one_hundred() {
    let catalog = Catalog::builtin().unwrap();
    for region in Region::ALL {
        for split in &catalog.dataset(region).gender {
            assert_eq!(u32::from(split.male) + u32::from(split.female) + u32::from(split.other), 100);
        }
    }
}

#[test]
fn builtin_notices_and_accounts() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.policies().len(), 4);
    assert_eq!(catalog.contacts().len(), 4);
    assert_eq!(catalog.knowledge_base().len(), 2);
    assert_eq!(catalog.accounts().default_account().display_name, "Paritosh");
    assert_eq!(catalog.accounts().resolve("Admin@Gov.in").role, "District Magistrate");
}

// =============================================================
// Fail-fast validation
// =============================================================

#[test]
fn missing_region_is_rejected() {
    let mut regions = all_regions();
    regions.remove("gujarat");
    let err = load(&serde_json::Value::Object(regions), &full_labels()).unwrap_err();
    assert_eq!(err, CatalogError::MissingRegion(Region::Gujarat));
}

#[test]
fn empty_chart_category_is_rejected() {
    let mut regions = all_regions();
    regions["bihar"]["efficiency"] = serde_json::json!([]);
    let err = load(&serde_json::Value::Object(regions), &full_labels()).unwrap_err();
    assert_eq!(err, CatalogError::EmptyField { region: Region::Bihar, field: RegionField::Efficiency });
}

#[test]
fn missing_label_is_rejected() {
    let mut labels = full_labels();
    labels["hi"].as_object_mut().unwrap().remove("ghost_title");
    let err = load(&serde_json::Value::Object(all_regions()), &labels).unwrap_err();
    assert_eq!(err, CatalogError::MissingLabel { language: Language::Hi, key: LabelKey::GhostTitle });
}

#[test]
fn missing_language_is_rejected() {
    let mut labels = full_labels();
    labels.as_object_mut().unwrap().remove("en");
    let err = load(&serde_json::Value::Object(all_regions()), &labels).unwrap_err();
    assert_eq!(err, CatalogError::MissingLanguage(Language::En));
}

#[test]
fn unknown_region_key_is_a_parse_error() {
    let mut regions = all_regions();
    regions.insert("kerala".to_owned(), minimal_region("3 Cr"));
    let err = load(&serde_json::Value::Object(regions), &full_labels()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { document: "regions", .. }));
}

#[test]
fn sparse_region_inherits_national_records() {
    let mut regions = all_regions();
    regions["india"]["anomalies"][0]["district"] = serde_json::json!("Bilaspur");
    regions.insert("delhi".to_owned(), serde_json::json!({ "population": "3.38 Cr" }));
    let catalog = load(&serde_json::Value::Object(regions), &full_labels()).unwrap();
    let delhi = catalog.dataset(Region::Delhi);
    assert_eq!(delhi.population, "3.38 Cr");
    assert_eq!(delhi.anomalies[0].district, "Bilaspur");
}

#[test]
fn error_messages_name_the_gap() {
    let err = CatalogError::EmptyField { region: Region::UttarPradesh, field: RegionField::Gender };
    assert_eq!(err.to_string(), "region uttar_pradesh has no gender records");
    let err = CatalogError::MissingLabel { language: Language::Hi, key: LabelKey::ChatReply };
    assert_eq!(err.to_string(), "label chat_reply missing for language hi");
}
