use super::*;

fn sample_dataset() -> RegionDataset {
    RegionDataset {
        population: "1 Cr".to_owned(),
        age: vec![AgeBand { name: "0-5".to_owned(), value: 1.0, fill: "#000".to_owned() }],
        anomalies: vec![AnomalyRecord { district: "A".to_owned(), total: 0.5, kids: 0.4, adult: 0.1 }],
        migration: vec![MigrationRecord { district: "A".to_owned(), updates: 10 }],
        gender: vec![GenderSplit { region: "N".to_owned(), male: 50, female: 49, other: 1 }],
        efficiency: vec![CenterEfficiency { district: "A".to_owned(), wait_time: 5, process_time: 2 }],
        biometric: vec![BiometricRecord { age_group: "0-5".to_owned(), enrolled: 1.0, saturation: 40.0 }],
        insight: Bilingual { en: "e".to_owned(), hi: "h".to_owned() },
    }
}

#[test]
fn region_codes_round_trip() {
    for region in Region::ALL {
        assert_eq!(Region::from_code(region.code()), Some(region));
    }
    assert_eq!(Region::from_code("kerala"), None);
}

#[test]
fn region_serde_uses_codes() {
    assert_eq!(serde_json::to_string(&Region::UttarPradesh).unwrap(), "\"uttar_pradesh\"");
    let parsed: Region = serde_json::from_str("\"maharashtra\"").unwrap();
    assert_eq!(parsed, Region::Maharashtra);
}

#[test]
fn region_selector_offers_six_options_national_first() {
    assert_eq!(Region::ALL.len(), 6);
    assert_eq!(Region::ALL[0], Region::India);
    assert!(Region::India.is_national());
    assert!(!Region::Bihar.is_national());
    assert_eq!(Region::UttarPradesh.caption(), "📍 UP");
}

#[test]
fn complete_dataset_has_no_empty_fields() {
    assert!(sample_dataset().empty_fields().is_empty());
}

#[test]
fn empty_fields_reports_each_missing_category() {
    let mut dataset = sample_dataset();
    dataset.migration.clear();
    dataset.biometric.clear();
    assert_eq!(dataset.empty_fields(), vec![RegionField::Migration, RegionField::Biometric]);
}

#[test]
fn absent_arrays_parse_as_empty() {
    let dataset: RegionDataset = serde_json::from_str(r#"{ "population": "2 Cr" }"#).unwrap();
    assert_eq!(dataset.population, "2 Cr");
    assert_eq!(dataset.empty_fields(), RegionField::ALL.to_vec());
}

#[test]
fn inheriting_keeps_population_and_copies_records() {
    let national = sample_dataset();
    let sparse = RegionDataset { population: "3.38 Cr".to_owned(), ..RegionDataset::default() };
    let filled = sparse.inheriting(&national);
    assert_eq!(filled.population, "3.38 Cr");
    assert_eq!(filled.anomalies, national.anomalies);
    assert_eq!(filled.insight, national.insight);
}
