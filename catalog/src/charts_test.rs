use super::*;
use crate::locale::Language;
use crate::region::{AgeBand, BiometricRecord, Region};
use crate::{Catalog, DashboardSource};

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

// =============================================================
// Anomaly filter
// =============================================================

#[test]
fn anomaly_filter_switch_changes_only_plotted_field() {
    let catalog = catalog();
    let dataset = catalog.dataset(Region::India);
    let labels = catalog.labels(Language::En);

    let total = anomaly_chart(dataset, labels, AnomalyFilter::Total);
    for filter in AnomalyFilter::ALL {
        let chart = anomaly_chart(dataset, labels, filter);
        assert_eq!(chart.categories, total.categories, "ordering changed for {filter:?}");
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].key, filter.key());
        let expected: Vec<f64> = dataset.anomalies.iter().map(|r| filter.value(r)).collect();
        assert_eq!(chart.series[0].values, expected);
    }
}

#[test]
fn anomaly_kids_is_amber_others_red() {
    assert_eq!(AnomalyFilter::Kids.color(), COLOR_AMBER);
    assert_eq!(AnomalyFilter::Total.color(), COLOR_RED);
    assert_eq!(AnomalyFilter::Adult.color(), COLOR_RED);
}

#[test]
fn anomaly_series_name_follows_language() {
    let catalog = catalog();
    let dataset = catalog.dataset(Region::Delhi);
    let en = anomaly_chart(dataset, catalog.labels(Language::En), AnomalyFilter::Kids);
    let hi = anomaly_chart(dataset, catalog.labels(Language::Hi), AnomalyFilter::Kids);
    assert_eq!(en.series[0].name, "0-5 YRS");
    assert_eq!(hi.series[0].name, "0-5 वर्ष");
    assert_eq!(en.series[0].values, hi.series[0].values);
    assert_eq!(en.categories, hi.categories);
}

#[test]
fn bihar_hindi_scenario() {
    let catalog = catalog();
    let dataset = catalog.dataset(Region::Bihar);
    let chart = Panel::Anomaly.chart(dataset, catalog.labels(Language::Hi), AnomalyFilter::Total);
    assert_eq!(dataset.population, "12.9 Cr");
    assert_eq!(chart.title, "विसंगति का पता लगाना");
    let index = chart.categories.iter().position(|d| d == "Darbhanga").unwrap();
    assert!((chart.series[0].values[index] - 0.63).abs() < f64::EPSILON);
}

// =============================================================
// Panel builders
// =============================================================

#[test]
fn population_chart_uses_band_colors_and_hides_axis() {
    let dataset = RegionDataset {
        age: vec![
            AgeBand { name: "0-5".to_owned(), value: 1.0, fill: "#111".to_owned() },
            AgeBand { name: "5-18".to_owned(), value: 2.0, fill: "#222".to_owned() },
        ],
        ..RegionDataset::default()
    };
    let chart = population_chart(&dataset, &LabelSet::default());
    assert!(!chart.show_category_axis);
    assert_eq!(chart.series[0].color_at(0), "#111");
    assert_eq!(chart.series[0].color_at(1), "#222");
    assert_eq!(chart.series[0].color_at(7), COLOR_BLUE);
}

#[test]
fn gender_chart_is_horizontal_stack_of_three() {
    let catalog = catalog();
    let chart = gender_chart(catalog.dataset(Region::Maharashtra), catalog.labels(Language::En));
    assert_eq!(chart.orientation, Orientation::Horizontal);
    assert!(chart.stacked);
    let keys: Vec<&str> = chart.series.iter().map(|s| s.key).collect();
    assert_eq!(keys, vec!["male", "female", "other"]);
    assert_eq!(chart.series[1].name, "Female %");
    for i in 0..chart.point_count() {
        let sum: f64 = chart.series.iter().map(|s| s.values[i]).sum();
        assert!((sum - 100.0).abs() < f64::EPSILON);
    }
}

#[test]
fn efficiency_chart_groups_wait_and_process() {
    let catalog = catalog();
    let chart = efficiency_chart(catalog.dataset(Region::Gujarat), catalog.labels(Language::En));
    assert_eq!(chart.categories[0], "GIFT City");
    assert_eq!(chart.series_by_key("wait_time").unwrap().values[1], 45.0);
    assert_eq!(chart.series_by_key("process_time").unwrap().color, COLOR_GREEN);
    assert!(!chart.stacked);
}

#[test]
fn biometric_chart_puts_saturation_on_percent_axis() {
    let dataset = RegionDataset {
        biometric: vec![BiometricRecord { age_group: "0-5".to_owned(), enrolled: 8.3, saturation: 42.0 }],
        ..RegionDataset::default()
    };
    let chart = biometric_chart(&dataset, &LabelSet::default());
    let saturation = chart.series_by_key("saturation").unwrap();
    assert_eq!(saturation.mark, Mark::Line);
    assert_eq!(saturation.axis, AxisSide::Right);
    assert_eq!(chart.series_by_key("enrolled").unwrap().axis, AxisSide::Left);
    assert_eq!(chart.right_axis, Some(AxisDomain { min: 0.0, max: 100.0, unit: "%" }));
}

#[test]
fn migration_chart_is_area_of_updates() {
    let catalog = catalog();
    let chart = migration_chart(catalog.dataset(Region::India), catalog.labels(Language::En));
    assert_eq!(chart.series[0].mark, Mark::Area);
    assert_eq!(chart.series[0].values[0], 411_163.0);
}

#[test]
fn every_panel_renders_zero_points_for_empty_dataset() {
    let empty = RegionDataset::default();
    for panel in Panel::ALL {
        let chart = panel.chart(&empty, &LabelSet::default(), AnomalyFilter::Adult);
        assert_eq!(chart.point_count(), 0, "{panel:?}");
        assert!(chart.series.iter().all(|s| s.values.is_empty()), "{panel:?}");
    }
}

#[test]
fn panel_titles_match_label_keys() {
    let catalog = catalog();
    let labels = catalog.labels(Language::En);
    for panel in Panel::ALL {
        let chart = panel.chart(catalog.dataset(Region::India), labels, AnomalyFilter::Total);
        assert_eq!(chart.title, labels.get(panel.title_key()));
        assert!(panel.label_keys().contains(&panel.title_key()));
    }
}

#[test]
fn language_toggle_keeps_every_value() {
    let catalog = catalog();
    for region in Region::ALL {
        let dataset = catalog.dataset(region);
        for panel in Panel::ALL {
            let en = panel.chart(dataset, catalog.labels(Language::En), AnomalyFilter::Total);
            let hi = panel.chart(dataset, catalog.labels(Language::Hi), AnomalyFilter::Total);
            assert_eq!(en.categories, hi.categories);
            let en_values: Vec<&Vec<f64>> = en.series.iter().map(|s| &s.values).collect();
            let hi_values: Vec<&Vec<f64>> = hi.series.iter().map(|s| &s.values).collect();
            assert_eq!(en_values, hi_values);
            assert_ne!(en.title, hi.title);
        }
    }
}
