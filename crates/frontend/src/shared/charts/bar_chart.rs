use leptos::prelude::*;

use super::geometry::{PlotArea, ValueScale};
use super::{Axes, ChartEmpty, Legend, VIEW_HEIGHT, VIEW_WIDTH};
use crate::shared::components::table::{format_value, ValueFormat};

const Y_TICKS: usize = 5;
/// Share of a category band taken by its bars
const BAR_FILL_RATIO: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub fill: String,
    pub border: String,
}

/// One named series of a grouped or stacked bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

fn value_scale(lo: f64, hi: f64, max: Option<f64>) -> ValueScale {
    match max {
        Some(max) if max > 0.0 => ValueScale::fixed(0.0, max, max / (Y_TICKS - 1) as f64),
        _ => ValueScale::nice(lo, hi, Y_TICKS),
    }
}

/// Top-left corner and height of a bar from `from` to `to` on `scale`
fn bar_rect(area: &PlotArea, scale: &ValueScale, from: f64, to: f64) -> (f64, f64) {
    let y_from = area.y_for(from, scale);
    let y_to = area.y_for(to, scale);
    (y_from.min(y_to), (y_from - y_to).abs())
}

/// One bar per category, each with its own colour
#[component]
pub fn BarChart(
    #[prop(into)] bars: Signal<Vec<BarDatum>>,
    value_format: ValueFormat,
    /// Fixed top of the value axis, e.g. 100 for percentages
    #[prop(optional)]
    max: Option<f64>,
) -> impl IntoView {
    let area = PlotArea::new(VIEW_WIDTH, VIEW_HEIGHT);

    move || {
        let bars = bars.get();
        if bars.is_empty() {
            return view! { <ChartEmpty message="No data available" /> }.into_any();
        }

        let count = bars.len();
        let lo = bars.iter().map(|b| b.value).fold(0.0, f64::min);
        let hi = bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let scale = value_scale(lo, hi, max);
        let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

        let rects = bars
            .into_iter()
            .enumerate()
            .map(|(i, bar)| {
                let (band_left, band_width) = area.band(i, count);
                let width = band_width * BAR_FILL_RATIO;
                let x = band_left + (band_width - width) / 2.0;
                let (y, height) = bar_rect(&area, &scale, 0.0, bar.value);
                let title = format!("{}: {}", bar.label, format_value(bar.value, value_format));
                view! {
                    <rect
                        x=x
                        y=y
                        width=width
                        height=height
                        rx=4.0
                        fill=bar.fill
                        stroke=bar.border
                        stroke-width="1"
                    >
                        <title>{title}</title>
                    </rect>
                }
            })
            .collect_view();

        view! {
            <div class="chart">
                <div class="chart__canvas">
                    <svg viewBox=format!("0 0 {} {}", area.width, area.height)>
                        <Axes
                            area=area
                            scale=scale
                            labels=labels
                            value_format=value_format
                            banded=true
                        />
                        {rects}
                    </svg>
                </div>
            </div>
        }
        .into_any()
    }
}

/// Several series per category, side by side or stacked
#[component]
pub fn MultiBarChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<BarSeries>>,
    value_format: ValueFormat,
    #[prop(optional)] stacked: bool,
) -> impl IntoView {
    let area = PlotArea::new(VIEW_WIDTH, VIEW_HEIGHT);

    move || {
        let labels = labels.get();
        let series = series.get();
        if labels.is_empty() || series.is_empty() {
            return view! { <ChartEmpty message="No data available" /> }.into_any();
        }

        let count = labels.len();
        let value_at = |s: &BarSeries, i: usize| s.values.get(i).copied().unwrap_or(0.0);
        let (lo, hi) = if stacked {
            (0..count).fold((0.0_f64, 0.0_f64), |(lo, hi), i| {
                let sum: f64 = series.iter().map(|s| value_at(s, i)).sum();
                (lo.min(sum), hi.max(sum))
            })
        } else {
            series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)))
        };
        let scale = ValueScale::nice(lo, hi, Y_TICKS);
        let legend = series
            .iter()
            .map(|s| (s.name.clone(), s.color.clone(), false))
            .collect::<Vec<_>>();

        let groups = series.len();
        let mut rects = Vec::with_capacity(count * groups);
        for i in 0..count {
            let (band_left, band_width) = area.band(i, count);
            let group_width = band_width * BAR_FILL_RATIO;
            let group_left = band_left + (band_width - group_width) / 2.0;
            let mut stack_top = 0.0;
            for (k, s) in series.iter().enumerate() {
                let value = value_at(s, i);
                let (x, width, from) = if stacked {
                    (group_left, group_width, stack_top)
                } else {
                    let width = group_width / groups as f64;
                    (group_left + width * k as f64, width, 0.0)
                };
                let (y, height) = bar_rect(&area, &scale, from, from + value);
                if stacked {
                    stack_top += value;
                }
                let title = format!(
                    "{} / {}: {}",
                    labels[i],
                    s.name,
                    format_value(value, value_format)
                );
                rects.push(view! {
                    <rect x=x y=y width=width height=height rx=3.0 fill=s.color.clone()>
                        <title>{title}</title>
                    </rect>
                });
            }
        }

        view! {
            <div class="chart">
                <Legend items=legend />
                <div class="chart__canvas">
                    <svg viewBox=format!("0 0 {} {}", area.width, area.height)>
                        <Axes
                            area=area
                            scale=scale
                            labels=labels
                            value_format=value_format
                            banded=true
                        />
                        {rects}
                    </svg>
                </div>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_percent_scale() {
        let scale = value_scale(0.0, 37.0, Some(100.0));
        assert_eq!(scale.ticks(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_bar_rect_grows_up_from_zero() {
        let area = PlotArea::new(480.0, 256.0);
        let scale = ValueScale::fixed(0.0, 100.0, 25.0);
        let (y, height) = bar_rect(&area, &scale, 0.0, 50.0);
        assert_eq!(y, 116.0);
        assert_eq!(height, 100.0);
    }
}
