use leptos::prelude::*;

use super::geometry::{arc_path, doughnut_slices, polar};
use super::ChartEmpty;
use crate::shared::components::table::{format_percent, format_value, ValueFormat};

const SIZE: f64 = 240.0;
const OUTER_RADIUS: f64 = 110.0;
const INNER_RADIUS: f64 = 66.0;
/// Slices below this share get no percentage label
const MIN_LABELED_PERCENT: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutDatum {
    pub label: String,
    pub value: f64,
    pub fill: String,
    pub border: String,
}

/// Share of each category, with the percentage printed on the slice
#[component]
pub fn DoughnutChart(
    #[prop(into)] slices: Signal<Vec<DoughnutDatum>>,
    value_format: ValueFormat,
) -> impl IntoView {
    move || {
        let data = slices.get();
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        if values.iter().all(|v| *v <= 0.0) {
            return view! { <ChartEmpty message="No data available" /> }.into_any();
        }

        let center = SIZE / 2.0;
        let arcs = doughnut_slices(&values);
        let segments = data
            .iter()
            .zip(&arcs)
            .filter(|(_, arc)| !arc.is_empty())
            .map(|(datum, arc)| {
                let d = arc_path(center, center, OUTER_RADIUS, INNER_RADIUS, arc.start, arc.end);
                let (lx, ly) = polar(center, center, (OUTER_RADIUS + INNER_RADIUS) / 2.0, arc.mid());
                let title = format!(
                    "{}: {} ({})",
                    datum.label,
                    format_value(datum.value, value_format),
                    format_percent(arc.percent, 1)
                );
                let label = (arc.percent >= MIN_LABELED_PERCENT).then(|| {
                    view! {
                        <text x=lx y=ly + 4.0 text-anchor="middle" class="chart-doughnut__label">
                            {format_percent(arc.percent, 0)}
                        </text>
                    }
                });
                view! {
                    <g>
                        <path d=d fill=datum.fill.clone() stroke=datum.border.clone() stroke-width="1">
                            <title>{title}</title>
                        </path>
                        {label}
                    </g>
                }
            })
            .collect_view();

        let legend = data
            .iter()
            .map(|datum| {
                let style = format!("background: {};", datum.fill);
                view! {
                    <li class="chart-legend__item">
                        <span class="chart-legend__swatch" style=style></span>
                        <span>{datum.label.clone()}</span>
                        <span class="chart-legend__value">
                            {format_value(datum.value, value_format)}
                        </span>
                    </li>
                }
            })
            .collect_view();

        view! {
            <div class="chart chart--doughnut">
                <svg viewBox=format!("0 0 {SIZE} {SIZE}") class="chart-doughnut">
                    {segments}
                </svg>
                <ul class="chart-legend chart-legend--vertical">{legend}</ul>
            </div>
        }
        .into_any()
    }
}
