//! Pure mapping from (dataset, labels, filter) to a renderer-neutral chart.
//!
//! DESIGN
//! ======
//! Panels never read records directly. Each builder here flattens a dataset
//! slice into categories plus value series, so renderers only deal with
//! numbers, captions, and colors. Builders are total: an empty record slice
//! yields a chart with zero categories.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use serde::{Deserialize, Serialize};

use crate::locale::{LabelKey, LabelSet};
use crate::region::{AnomalyRecord, RegionDataset};

pub const COLOR_RED: &str = "#ef4444";
pub const COLOR_AMBER: &str = "#f59e0b";
pub const COLOR_BLUE: &str = "#3b82f6";
pub const COLOR_PINK: &str = "#ec4899";
pub const COLOR_PURPLE: &str = "#a855f7";
pub const COLOR_GREEN: &str = "#10b981";

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Bar,
    Area,
    Line,
}

/// Which value axis a series is scaled against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// Bar direction. Horizontal charts put categories on the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Fixed domain for a value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Record field the values were read from.
    pub key: &'static str,
    /// Legend caption in the active language.
    pub name: String,
    pub mark: Mark,
    pub axis: AxisSide,
    pub color: String,
    /// Per-point colors; empty means every point uses `color`.
    pub point_colors: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    fn new(key: &'static str, name: &str, mark: Mark, color: &str, values: Vec<f64>) -> Self {
        Self {
            key,
            name: name.to_owned(),
            mark,
            axis: AxisSide::Left,
            color: color.to_owned(),
            point_colors: Vec::new(),
            values,
        }
    }

    fn on_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    /// Color of the point at `index`.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        self.point_colors.get(index).map_or(self.color.as_str(), String::as_str)
    }
}

/// Renderer-neutral chart description.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub orientation: Orientation,
    /// Bars of all series share one stack per category.
    pub stacked: bool,
    pub show_category_axis: bool,
    pub show_legend: bool,
    pub right_axis: Option<AxisDomain>,
}

impl ChartSpec {
    fn new(title: &str, categories: Vec<String>) -> Self {
        Self {
            title: title.to_owned(),
            categories,
            series: Vec::new(),
            orientation: Orientation::Vertical,
            stacked: false,
            show_category_axis: true,
            show_legend: false,
            right_axis: None,
        }
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn series_by_key(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.key == key)
    }
}

/// Which anomaly share the anomaly panel plots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyFilter {
    #[default]
    Total,
    Kids,
    Adult,
}

impl AnomalyFilter {
    pub const ALL: [Self; 3] = [Self::Total, Self::Kids, Self::Adult];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Kids => "kids",
            Self::Adult => "adult",
        }
    }

    #[must_use]
    pub fn label_key(self) -> LabelKey {
        match self {
            Self::Total => LabelKey::Total,
            Self::Kids => LabelKey::Kids,
            Self::Adult => LabelKey::Adult,
        }
    }

    #[must_use]
    pub fn value(self, record: &AnomalyRecord) -> f64 {
        match self {
            Self::Total => record.total,
            Self::Kids => record.kids,
            Self::Adult => record.adult,
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Kids => COLOR_AMBER,
            Self::Total | Self::Adult => COLOR_RED,
        }
    }
}

/// The six charted panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Population,
    Anomaly,
    Migration,
    Gender,
    Efficiency,
    Biometric,
}

impl Panel {
    pub const ALL: [Self; 6] = [
        Self::Population,
        Self::Anomaly,
        Self::Migration,
        Self::Gender,
        Self::Efficiency,
        Self::Biometric,
    ];

    #[must_use]
    pub fn title_key(self) -> LabelKey {
        match self {
            Self::Population => LabelKey::PopTitle,
            Self::Anomaly => LabelKey::GhostTitle,
            Self::Migration => LabelKey::MigTitle,
            Self::Gender => LabelKey::GenderTitle,
            Self::Efficiency => LabelKey::EffTitle,
            Self::Biometric => LabelKey::BioTitle,
        }
    }

    /// Every label the panel's chart reads, title included.
    #[must_use]
    pub fn label_keys(self) -> &'static [LabelKey] {
        match self {
            Self::Population => &[LabelKey::PopTitle, LabelKey::Population],
            Self::Anomaly => &[LabelKey::GhostTitle, LabelKey::Total, LabelKey::Kids, LabelKey::Adult],
            Self::Migration => &[LabelKey::MigTitle, LabelKey::Updates],
            Self::Gender => &[LabelKey::GenderTitle, LabelKey::Male, LabelKey::Female, LabelKey::Other],
            Self::Efficiency => &[LabelKey::EffTitle, LabelKey::WaitTime, LabelKey::ProcessTime],
            Self::Biometric => &[LabelKey::BioTitle, LabelKey::Enrolled, LabelKey::Saturation],
        }
    }

    /// Build this panel's chart. `filter` only affects [`Panel::Anomaly`].
    #[must_use]
    pub fn chart(self, dataset: &RegionDataset, labels: &LabelSet, filter: AnomalyFilter) -> ChartSpec {
        match self {
            Self::Population => population_chart(dataset, labels),
            Self::Anomaly => anomaly_chart(dataset, labels, filter),
            Self::Migration => migration_chart(dataset, labels),
            Self::Gender => gender_chart(dataset, labels),
            Self::Efficiency => efficiency_chart(dataset, labels),
            Self::Biometric => biometric_chart(dataset, labels),
        }
    }
}

/// Age distribution bars, one color per band, category axis hidden.
#[must_use]
pub fn population_chart(dataset: &RegionDataset, labels: &LabelSet) -> ChartSpec {
    let mut chart = ChartSpec::new(
        labels.get(LabelKey::PopTitle),
        dataset.age.iter().map(|band| band.name.clone()).collect(),
    );
    chart.show_category_axis = false;

    let mut series = Series::new(
        "value",
        labels.get(LabelKey::Population),
        Mark::Bar,
        COLOR_BLUE,
        dataset.age.iter().map(|band| band.value).collect(),
    );
    series.point_colors = dataset.age.iter().map(|band| band.fill.clone()).collect();
    chart.series.push(series);
    chart
}

/// Per-district anomaly share for the selected filter.
#[must_use]
pub fn anomaly_chart(dataset: &RegionDataset, labels: &LabelSet, filter: AnomalyFilter) -> ChartSpec {
    let mut chart = ChartSpec::new(
        labels.get(LabelKey::GhostTitle),
        dataset.anomalies.iter().map(|r| r.district.clone()).collect(),
    );
    chart.series.push(Series::new(
        filter.key(),
        labels.get(filter.label_key()),
        Mark::Bar,
        filter.color(),
        dataset.anomalies.iter().map(|r| filter.value(r)).collect(),
    ));
    chart
}

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn migration_chart(dataset: &RegionDataset, labels: &LabelSet) -> ChartSpec {
    let mut chart = ChartSpec::new(
        labels.get(LabelKey::MigTitle),
        dataset.migration.iter().map(|r| r.district.clone()).collect(),
    );
    chart.series.push(Series::new(
        "updates",
        labels.get(LabelKey::Updates),
        Mark::Area,
        COLOR_BLUE,
        dataset.migration.iter().map(|r| r.updates as f64).collect(),
    ));
    chart
}

/// Horizontal stacked male/female/other shares per sub-region.
#[must_use]
pub fn gender_chart(dataset: &RegionDataset, labels: &LabelSet) -> ChartSpec {
    let mut chart = ChartSpec::new(
        labels.get(LabelKey::GenderTitle),
        dataset.gender.iter().map(|r| r.region.clone()).collect(),
    );
    chart.orientation = Orientation::Horizontal;
    chart.stacked = true;
    chart.show_legend = true;
    chart.series = vec![
        Series::new(
            "male",
            labels.get(LabelKey::Male),
            Mark::Bar,
            COLOR_BLUE,
            dataset.gender.iter().map(|r| f64::from(r.male)).collect(),
        ),
        Series::new(
            "female",
            labels.get(LabelKey::Female),
            Mark::Bar,
            COLOR_PINK,
            dataset.gender.iter().map(|r| f64::from(r.female)).collect(),
        ),
        Series::new(
            "other",
            labels.get(LabelKey::Other),
            Mark::Bar,
            COLOR_PURPLE,
            dataset.gender.iter().map(|r| f64::from(r.other)).collect(),
        ),
    ];
    chart
}

/// Grouped wait/process bars per center.
#[must_use]
pub fn efficiency_chart(dataset: &RegionDataset, labels: &LabelSet) -> ChartSpec {
    let mut chart = ChartSpec::new(
        labels.get(LabelKey::EffTitle),
        dataset.efficiency.iter().map(|r| r.district.clone()).collect(),
    );
    chart.show_legend = true;
    chart.series = vec![
        Series::new(
            "wait_time",
            labels.get(LabelKey::WaitTime),
            Mark::Bar,
            COLOR_RED,
            dataset.efficiency.iter().map(|r| f64::from(r.wait_time)).collect(),
        ),
        Series::new(
            "process_time",
            labels.get(LabelKey::ProcessTime),
            Mark::Bar,
            COLOR_GREEN,
            dataset.efficiency.iter().map(|r| f64::from(r.process_time)).collect(),
        ),
    ];
    chart
}

/// Enrolled bars on the left axis, saturation line on a 0-100 % right axis.
#[must_use]
pub fn biometric_chart(dataset: &RegionDataset, labels: &LabelSet) -> ChartSpec {
    let mut chart = ChartSpec::new(
        labels.get(LabelKey::BioTitle),
        dataset.biometric.iter().map(|r| r.age_group.clone()).collect(),
    );
    chart.show_legend = true;
    chart.right_axis = Some(AxisDomain { min: 0.0, max: 100.0, unit: "%" });
    chart.series = vec![
        Series::new(
            "enrolled",
            labels.get(LabelKey::Enrolled),
            Mark::Bar,
            COLOR_BLUE,
            dataset.biometric.iter().map(|r| r.enrolled).collect(),
        ),
        Series::new(
            "saturation",
            labels.get(LabelKey::Saturation),
            Mark::Line,
            COLOR_AMBER,
            dataset.biometric.iter().map(|r| r.saturation).collect(),
        )
        .on_axis(AxisSide::Right),
    ];
    chart
}
