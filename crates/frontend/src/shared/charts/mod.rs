//! Inline SVG charts. Layout math lives in `geometry`; the components only
//! turn it into elements.

pub mod bar_chart;
pub mod doughnut_chart;
pub mod geometry;
pub mod line_chart;

pub use bar_chart::{BarChart, BarDatum, BarSeries, MultiBarChart};
pub use doughnut_chart::{DoughnutChart, DoughnutDatum};
pub use line_chart::{ForecastChart, TrendChart};

use crate::shared::components::table::{format_compact, ValueFormat};
use geometry::{PlotArea, ValueScale};
use leptos::prelude::*;

/// viewBox size shared by the cartesian charts; they scale to their container
pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 360.0;

/// At most this many x labels are printed
const MAX_X_LABELS: usize = 12;

pub fn axis_label(value: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => {
            if value < 0.0 {
                format!("-${}", format_compact(-value))
            } else {
                format!("${}", format_compact(value))
            }
        }
        ValueFormat::Percent { .. } => format!("{}%", format_compact(value)),
        _ => format_compact(value),
    }
}

/// Every n-th label is printed so that no more than `MAX_X_LABELS` remain
pub fn label_stride(count: usize) -> usize {
    count.div_ceil(MAX_X_LABELS).max(1)
}

/// Grid lines, y tick labels and x labels of a cartesian chart
#[component]
pub fn Axes(
    area: PlotArea,
    scale: ValueScale,
    labels: Vec<String>,
    value_format: ValueFormat,
    /// Labels sit in the middle of category bands instead of on points
    #[prop(optional)]
    banded: bool,
) -> impl IntoView {
    let count = labels.len();
    let stride = label_stride(count);

    let y_ticks = scale
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = area.y_for(tick, &scale);
            view! {
                <g class="chart-axis__tick">
                    <line x1=area.left y1=y x2=area.width - area.right y2=y stroke="#f3f4f6" />
                    <text x=area.left - 8.0 y=y + 4.0 text-anchor="end" class="chart-axis__label">
                        {axis_label(tick, value_format)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let x_labels = labels
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, label)| {
            let x = if banded {
                let (left, width) = area.band(i, count);
                left + width / 2.0
            } else {
                area.x_for(i, count)
            };
            view! {
                <text x=x y=area.baseline() + 20.0 text-anchor="middle" class="chart-axis__label">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart-axis">
            {y_ticks}
            <line
                x1=area.left
                y1=area.baseline()
                x2=area.width - area.right
                y2=area.baseline()
                stroke="#e5e7eb"
            />
            {x_labels}
        </g>
    }
}

/// Legend row above a chart
#[component]
pub fn Legend(
    /// (label, colour, dashed)
    items: Vec<(String, String, bool)>,
) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|(label, color, dashed)| {
                    let style = if dashed {
                        format!("border-top: 2px dashed {color};")
                    } else {
                        format!("background: {color};")
                    };
                    view! {
                        <span class="chart-legend__item">
                            <span class="chart-legend__swatch" style=style></span>
                            {label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Placeholder shown instead of an empty chart
#[component]
pub fn ChartEmpty(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="chart-empty">{message}</div>
    }
}
