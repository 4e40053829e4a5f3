//! SVG chart renderer.
//!
//! DESIGN
//! ======
//! Geometry comes from `util::chart_layout`; this component only turns
//! primitives into SVG nodes. Each mark carries a `<title>` so hovering a bar
//! or point shows its category and value.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use catalog::ChartSpec;
use catalog::charts::{Mark, Orientation};
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::util::chart_layout::{ChartLayout, VIEW_HEIGHT, VIEW_WIDTH, format_tick, layout_chart};

/// SVG coordinate text.
fn px(value: f64) -> String {
    format!("{value:.1}")
}

/// Hover caption for one data point.
fn point_caption(category: &str, series: &str, value: f64) -> String {
    format!("{category}: {} {series}", format_tick(value, ""))
}

fn caption_for(spec: &ChartSpec, series: usize, index: usize) -> String {
    let category = spec.categories.get(index).map_or("", String::as_str);
    spec.series.get(series).map_or_else(String::new, |s| {
        point_caption(category, &s.name, s.values.get(index).copied().unwrap_or(0.0))
    })
}

fn axes_view(spec: &ChartSpec, layout: &ChartLayout) -> AnyView {
    let plot = layout.plot;
    let horizontal = spec.orientation == Orientation::Horizontal;

    let grid = layout
        .value_ticks
        .iter()
        .map(|tick| {
            let y = px(plot.top + tick.position);
            view! {
                <line
                    class="chart__grid"
                    x1=px(plot.left)
                    x2=px(plot.right())
                    y1=y.clone()
                    y2=y.clone()
                ></line>
                <text class="chart__tick" x=px(plot.left - 4.0) y=y text-anchor="end" dominant-baseline="middle">
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let right = layout
        .right_ticks
        .iter()
        .map(|tick| {
            view! {
                <text
                    class="chart__tick"
                    x=px(plot.right() + 4.0)
                    y=px(plot.top + tick.position)
                    text-anchor="start"
                    dominant-baseline="middle"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let categories = layout
        .category_ticks
        .iter()
        .map(|tick| {
            if horizontal {
                view! {
                    <text
                        class="chart__tick"
                        x=px(plot.left - 4.0)
                        y=px(plot.top + tick.position)
                        text-anchor="end"
                        dominant-baseline="middle"
                    >
                        {tick.label.clone()}
                    </text>
                }
                .into_any()
            } else {
                view! {
                    <text
                        class="chart__tick"
                        x=px(plot.left + tick.position)
                        y=px(plot.bottom() + 14.0)
                        text-anchor="middle"
                        dominant-baseline="auto"
                    >
                        {tick.label.clone()}
                    </text>
                }
                .into_any()
            }
        })
        .collect_view();

    view! { <g class="chart__axes">{grid} {right} {categories}</g> }.into_any()
}

fn marks_view(spec: &ChartSpec, layout: &ChartLayout) -> AnyView {
    let bars = layout
        .bars
        .iter()
        .map(|bar| {
            view! {
                <rect
                    class="chart__bar"
                    x=px(bar.x)
                    y=px(bar.y)
                    width=px(bar.width)
                    height=px(bar.height)
                    rx="2"
                    fill=bar.color.clone()
                >
                    <title>{caption_for(spec, bar.series, bar.index)}</title>
                </rect>
            }
        })
        .collect_view();

    let paths = layout
        .paths
        .iter()
        .map(|path| {
            let area = path.fill.clone().map(|d| {
                view! { <path class="chart__area" d=d fill=path.color.clone() fill-opacity="0.25"></path> }
            });
            let is_line = spec.series.get(path.series).is_some_and(|s| s.mark == Mark::Line);
            let dot_radius = if is_line { "4" } else { "2" };
            let stroke_width = if is_line { "3" } else { "2" };
            let dots = path
                .points
                .iter()
                .enumerate()
                .map(|(index, (x, y))| {
                    view! {
                        <circle
                            class="chart__dot"
                            cx=px(*x)
                            cy=px(*y)
                            r=dot_radius
                            fill=path.color.clone()
                        >
                            <title>{caption_for(spec, path.series, index)}</title>
                        </circle>
                    }
                })
                .collect_view();
            view! {
                <g class="chart__series">
                    {area}
                    <polyline
                        class="chart__line"
                        points=path.stroke_points()
                        fill="none"
                        stroke=path.color.clone()
                        stroke-width=stroke_width
                    ></polyline>
                    {dots}
                </g>
            }
        })
        .collect_view();

    view! { <g class="chart__marks">{bars} {paths}</g> }.into_any()
}

/// Render `spec` as a responsive SVG chart with an optional legend.
#[component]
pub fn Chart(#[prop(into)] spec: Signal<ChartSpec>, #[prop(optional)] tall: bool) -> impl IntoView {
    let legend = move || {
        let spec = spec.get();
        if !spec.show_legend {
            return None;
        }
        let items = spec
            .series
            .into_iter()
            .map(|series| {
                view! {
                    <li class="chart-legend__item">
                        <span class="chart-legend__swatch" style:background-color=series.color></span>
                        {series.name}
                    </li>
                }
            })
            .collect_view();
        Some(view! { <ul class="chart-legend">{items}</ul> })
    };

    view! {
        <div class="chart" class:chart--tall=tall>
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                role="img"
                aria-label=move || spec.get().title
            >
                {move || {
                    let spec = spec.get();
                    let layout = layout_chart(&spec);
                    view! {
                        {axes_view(&spec, &layout)}
                        {marks_view(&spec, &layout)}
                    }
                }}
            </svg>
            {legend}
        </div>
    }
}
