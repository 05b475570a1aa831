use contracts::shared::analytics::{MergedSeries, SeriesTrack, TimeSeriesPoint};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::geometry::{band_path, line_path, PlotArea, ValueScale};
use super::{Axes, ChartEmpty, Legend, VIEW_HEIGHT, VIEW_WIDTH};
use crate::shared::components::table::{format_value, ValueFormat};

const HISTORICAL_COLOR: &str = "rgb(53, 162, 235)";
const PREDICTED_COLOR: &str = "rgb(255, 99, 132)";
const BAND_FILL: &str = "rgba(255, 99, 132, 0.1)";
const Y_TICKS: usize = 5;

/// Index under the pointer, in viewBox coordinates
fn hovered_index(ev: &web_sys::MouseEvent, area: &PlotArea, count: usize) -> Option<usize> {
    let target = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())?;
    let width = target.client_width() as f64;
    if width <= 0.0 {
        return None;
    }
    let x = ev.offset_x() as f64 * area.width / width;
    area.nearest_index(x, count)
}

fn to_points(values: &[Option<f64>], area: &PlotArea, scale: &ValueScale) -> Vec<Option<(f64, f64)>> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| v.map(|v| (area.x_for(i, count), area.y_for(v, scale))))
        .collect()
}

/// Single filled line, used for the revenue trend
#[component]
pub fn TrendChart(
    #[prop(into)] points: Signal<Vec<TimeSeriesPoint>>,
    #[prop(into)] label: String,
    value_format: ValueFormat,
    #[prop(optional, into)] color: Option<String>,
) -> impl IntoView {
    let area = PlotArea::new(VIEW_WIDTH, VIEW_HEIGHT);
    let color = color.unwrap_or_else(|| HISTORICAL_COLOR.to_string());
    let hovered = RwSignal::new(None::<usize>);
    let legend = vec![(label.clone(), color.clone(), false)];

    move || {
        let points = points.get();
        if points.is_empty() {
            return view! { <ChartEmpty message="No data available" /> }.into_any();
        }

        let count = points.len();
        let lo = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
        let scale = ValueScale::nice(lo, hi, Y_TICKS);
        let values: Vec<Option<f64>> = points.iter().map(|p| Some(p.value)).collect();
        let coords = to_points(&values, &area, &scale);
        let line = line_path(&coords);
        let fill = format!(
            "{line} L{:.1},{:.1} L{:.1},{:.1} Z",
            area.x_for(count - 1, count),
            area.baseline(),
            area.x_for(0, count),
            area.baseline()
        );
        let labels: Vec<String> = points.iter().map(|p| p.period.clone()).collect();

        let markers = coords
            .iter()
            .flatten()
            .map(|&(x, y)| view! { <circle cx=x cy=y r=3.0 fill=color.clone() /> })
            .collect_view();

        let tooltip_points = points.clone();
        let tooltip_label = label.clone();
        let tooltip = move || {
            let index = hovered.get()?;
            let point = tooltip_points.get(index)?;
            let left = area.x_for(index, count) / area.width * 100.0;
            Some(view! {
                <div class="chart-tooltip" style=format!("left: {left:.1}%;")>
                    <div class="chart-tooltip__title">{point.period.clone()}</div>
                    <div>
                        {format!("{}: {}", tooltip_label, format_value(point.value, value_format))}
                    </div>
                </div>
            })
        };

        view! {
            <div class="chart">
                <Legend items=legend.clone() />
                <div class="chart__canvas">
                    <svg
                        viewBox=format!("0 0 {} {}", area.width, area.height)
                        on:mousemove=move |ev| hovered.set(hovered_index(&ev, &area, count))
                        on:mouseleave=move |_| hovered.set(None)
                    >
                        <Axes area=area scale=scale labels=labels value_format=value_format />
                        <path d=fill fill=color.clone() fill-opacity="0.1" stroke="none" />
                        <path d=line fill="none" stroke=color.clone() stroke-width="2" />
                        {markers}
                    </svg>
                    {tooltip}
                </div>
            </div>
        }
        .into_any()
    }
}

/// Historical line, dashed prediction and the shaded 10-90% band between
/// the lower and upper quantiles
#[component]
pub fn ForecastChart(
    #[prop(into)] series: Signal<MergedSeries>,
    /// e.g. "Units Sold"
    #[prop(into)]
    metric_label: String,
    value_format: ValueFormat,
) -> impl IntoView {
    let area = PlotArea::new(VIEW_WIDTH, VIEW_HEIGHT);
    let hovered = RwSignal::new(None::<usize>);

    let track_label = move |track: SeriesTrack, metric: &str| match track {
        SeriesTrack::Historical => format!("Historical {metric}"),
        SeriesTrack::Predicted => format!("Predicted {metric}"),
        SeriesTrack::Upper => "Upper bound (90%)".to_string(),
        SeriesTrack::Lower => "Lower bound (10%)".to_string(),
    };
    let track_color = |track: SeriesTrack| match track {
        SeriesTrack::Historical => HISTORICAL_COLOR,
        _ => PREDICTED_COLOR,
    };

    move || {
        let merged = series.get();
        let Some((lo, hi)) = merged.value_range() else {
            return view! { <ChartEmpty message="No data available" /> }.into_any();
        };

        let count = merged.len();
        let scale = ValueScale::nice(lo, hi, Y_TICKS);
        let historical = to_points(&merged.historical, &area, &scale);
        let predicted = to_points(&merged.predicted, &area, &scale);
        let upper = to_points(&merged.upper, &area, &scale);
        let lower = to_points(&merged.lower, &area, &scale);
        let band = band_path(&upper, &lower);

        let legend = merged
            .legend_entries()
            .into_iter()
            .map(|track| {
                (
                    track_label(track, &metric_label),
                    track_color(track).to_string(),
                    track == SeriesTrack::Predicted,
                )
            })
            .collect::<Vec<_>>();

        let historical_markers = historical
            .iter()
            .flatten()
            .map(|&(x, y)| view! { <circle cx=x cy=y r=3.0 fill=HISTORICAL_COLOR /> })
            .collect_view();

        let predicted_markers = predicted
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|(x, y)| (i, x, y)))
            .map(|(i, x, y)| {
                let base = merged.point_radius(i);
                let hover = merged.point_hover_radius(i);
                let r = move || if hovered.get() == Some(i) { hover } else { base };
                view! { <circle cx=x cy=y r=r fill=PREDICTED_COLOR /> }
            })
            .collect_view();

        let tooltip_merged = merged.clone();
        let tooltip_metric = metric_label.clone();
        let tooltip = move || {
            let index = hovered.get()?;
            let title = tooltip_merged.labels.get(index)?.clone();
            let rows = [
                SeriesTrack::Historical,
                SeriesTrack::Predicted,
                SeriesTrack::Upper,
                SeriesTrack::Lower,
            ]
            .into_iter()
            .filter(|&track| tooltip_merged.shows_tooltip(track, index))
            .filter_map(|track| {
                let value = tooltip_merged.track(track).get(index).copied().flatten()?;
                Some(format!(
                    "{}: {}",
                    track_label(track, &tooltip_metric),
                    format_value(value, value_format)
                ))
            })
            .map(|row| view! { <div>{row}</div> })
            .collect_view();
            let left = area.x_for(index, count) / area.width * 100.0;
            Some(view! {
                <div class="chart-tooltip" style=format!("left: {left:.1}%;")>
                    <div class="chart-tooltip__title">{title}</div>
                    {rows}
                </div>
            })
        };

        view! {
            <div class="chart">
                <Legend items=legend />
                <div class="chart__canvas">
                    <svg
                        viewBox=format!("0 0 {} {}", area.width, area.height)
                        on:mousemove=move |ev| hovered.set(hovered_index(&ev, &area, count))
                        on:mouseleave=move |_| hovered.set(None)
                    >
                        <Axes
                            area=area
                            scale=scale
                            labels=merged.labels.clone()
                            value_format=value_format
                        />
                        {band.map(|d| view! { <path d=d fill=BAND_FILL stroke="none" /> })}
                        <path
                            d=line_path(&upper)
                            fill="none"
                            stroke=BAND_FILL
                            stroke-width="1"
                        />
                        <path
                            d=line_path(&lower)
                            fill="none"
                            stroke=BAND_FILL
                            stroke-width="1"
                        />
                        <path
                            d=line_path(&historical)
                            fill="none"
                            stroke=HISTORICAL_COLOR
                            stroke-width="2"
                        />
                        <path
                            d=line_path(&predicted)
                            fill="none"
                            stroke=PREDICTED_COLOR
                            stroke-width="2"
                            stroke-dasharray="6 4"
                        />
                        {historical_markers}
                        {predicted_markers}
                    </svg>
                    {tooltip}
                </div>
            </div>
        }
        .into_any()
    }
}
