//! SVG geometry for dashboard charts.
//!
//! DESIGN
//! ======
//! Layout is a pure function of a [`ChartSpec`] and a fixed view box, so the
//! chart component only maps primitives to SVG elements and the SSR and
//! hydrated renders agree byte for byte. Values below zero are drawn at zero.
//! A chart with no categories produces no primitives at all.

#[cfg(test)]
#[path = "chart_layout_test.rs"]
mod chart_layout_test;

use catalog::charts::{AxisSide, Mark, Orientation, Series};
use catalog::ChartSpec;

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 220.0;

/// Number of intervals between value-axis ticks.
const VALUE_TICK_STEPS: u32 = 4;
/// Share of a category band covered by its bars.
const BAR_GROUP_FILL: f64 = 0.7;

/// Plot area inside the view box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Area or line series geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub series: usize,
    pub color: String,
    pub points: Vec<(f64, f64)>,
    /// Closed outline down to the baseline; `None` for plain lines.
    pub fill: Option<String>,
}

impl SeriesPath {
    /// `points` attribute for an SVG polyline.
    #[must_use]
    pub fn stroke_points(&self) -> String {
        self.points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect::<Vec<_>>().join(" ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Offset along the axis in view-box units.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub bars: Vec<BarRect>,
    pub paths: Vec<SeriesPath>,
    pub category_ticks: Vec<AxisTick>,
    pub value_ticks: Vec<AxisTick>,
    pub right_ticks: Vec<AxisTick>,
}

impl ChartLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.paths.is_empty()
    }
}

/// Round `max` up to 1, 2, or 5 times a power of ten.
#[must_use]
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick caption: integers without decimals, otherwise up to two places.
#[must_use]
pub fn format_tick(value: f64, unit: &str) -> String {
    let text = if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.2}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    };
    format!("{text}{unit}")
}

fn plot_area(spec: &ChartSpec) -> PlotArea {
    let horizontal = spec.orientation == Orientation::Horizontal;
    let left = if horizontal { 64.0 } else { 36.0 };
    let right = if spec.right_axis.is_some() { 36.0 } else { 12.0 };
    let top = 10.0;
    let bottom = if spec.show_category_axis && !horizontal { 24.0 } else { 8.0 };
    PlotArea { left, top, width: VIEW_WIDTH - left - right, height: VIEW_HEIGHT - top - bottom }
}

fn clamp_value(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Largest drawn extent on the left axis, summing stacks when stacked.
fn left_extent(spec: &ChartSpec) -> f64 {
    let left: Vec<&Series> = spec.series.iter().filter(|s| s.axis == AxisSide::Left).collect();
    (0..spec.point_count())
        .map(|i| {
            let mut stack = 0.0_f64;
            let mut peak = 0.0_f64;
            for series in &left {
                let value = series.values.get(i).copied().map_or(0.0, clamp_value);
                if spec.stacked && series.mark == Mark::Bar {
                    stack += value;
                } else {
                    peak = peak.max(value);
                }
            }
            peak.max(stack)
        })
        .fold(0.0, f64::max)
}

fn value_ticks(max: f64, min: f64, length: f64, unit: &str) -> Vec<AxisTick> {
    (0..=VALUE_TICK_STEPS)
        .map(|step| {
            let share = f64::from(step) / f64::from(VALUE_TICK_STEPS);
            AxisTick { position: length * (1.0 - share), label: format_tick(min + (max - min) * share, unit) }
        })
        .collect()
}

/// Lay out `spec` in the fixed view box.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn layout_chart(spec: &ChartSpec) -> ChartLayout {
    let plot = plot_area(spec);
    let count = spec.point_count();
    let mut layout = ChartLayout {
        plot,
        bars: Vec::new(),
        paths: Vec::new(),
        category_ticks: Vec::new(),
        value_ticks: Vec::new(),
        right_ticks: Vec::new(),
    };
    if count == 0 {
        return layout;
    }

    let horizontal = spec.orientation == Orientation::Horizontal;
    let left_max = nice_ceiling(left_extent(spec));
    let (right_min, right_max) = spec.right_axis.as_ref().map_or((0.0, left_max), |d| (d.min, d.max));
    let category_length = if horizontal { plot.height } else { plot.width };
    let value_length = if horizontal { plot.width } else { plot.height };
    let band = category_length / count as f64;
    let group = band * BAR_GROUP_FILL;

    let bar_series: Vec<usize> =
        spec.series.iter().enumerate().filter(|(_, s)| s.mark == Mark::Bar).map(|(i, _)| i).collect();
    let slots = if spec.stacked { 1 } else { bar_series.len().max(1) };
    let slot_width = group / slots as f64;

    let scale = |series: &Series, value: f64| -> f64 {
        match series.axis {
            AxisSide::Left => clamp_value(value) / left_max * value_length,
            AxisSide::Right => {
                let span = right_max - right_min;
                if span <= 0.0 {
                    0.0
                } else {
                    ((value - right_min) / span).clamp(0.0, 1.0) * value_length
                }
            }
        }
    };

    for index in 0..count {
        let band_start = band * index as f64 + (band - group) / 2.0;
        let mut stacked_offset = 0.0;
        for (slot, &series_index) in bar_series.iter().enumerate() {
            let series = &spec.series[series_index];
            let value = series.values.get(index).copied().unwrap_or(0.0);
            let extent = scale(series, value);
            let across = if spec.stacked { band_start } else { band_start + slot_width * slot as f64 };
            let offset = if spec.stacked { stacked_offset } else { 0.0 };
            stacked_offset += extent;
            let bar = if horizontal {
                BarRect {
                    series: series_index,
                    index,
                    x: plot.left + offset,
                    y: plot.top + across,
                    width: extent,
                    height: slot_width,
                    color: series.color_at(index).to_owned(),
                }
            } else {
                BarRect {
                    series: series_index,
                    index,
                    x: plot.left + across,
                    y: plot.bottom() - offset - extent,
                    width: slot_width,
                    height: extent,
                    color: series.color_at(index).to_owned(),
                }
            };
            layout.bars.push(bar);
        }
    }

    for (series_index, series) in spec.series.iter().enumerate() {
        if series.mark == Mark::Bar || horizontal {
            continue;
        }
        let points: Vec<(f64, f64)> = (0..count)
            .map(|index| {
                let value = series.values.get(index).copied().unwrap_or(0.0);
                (plot.left + band * (index as f64 + 0.5), plot.bottom() - scale(series, value))
            })
            .collect();
        let fill = (series.mark == Mark::Area).then(|| area_outline(&points, plot.bottom()));
        layout.paths.push(SeriesPath { series: series_index, color: series.color.clone(), points, fill });
    }

    if spec.show_category_axis {
        layout.category_ticks = spec
            .categories
            .iter()
            .enumerate()
            .map(|(index, label)| AxisTick { position: band * (index as f64 + 0.5), label: label.clone() })
            .collect();
    }
    if !horizontal {
        layout.value_ticks = value_ticks(left_max, 0.0, value_length, "");
        if let Some(domain) = &spec.right_axis {
            layout.right_ticks = value_ticks(domain.max, domain.min, value_length, domain.unit);
        }
    }
    layout
}

fn area_outline(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = format!("M{:.1},{baseline:.1}", first.0);
    for (x, y) in points {
        path.push_str(&format!(" L{x:.1},{y:.1}"));
    }
    path.push_str(&format!(" L{:.1},{baseline:.1} Z", last.0));
    path
}
