use crate::dashboards::d400_home::api;
use crate::shared::charts::{BarChart, BarDatum, TrendChart};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::ValueFormat;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_product_metrics::MetricsResponse;
use contracts::shared::analytics::{assign_colors, VIBRANT_PALETTE};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

/// Bars in the Top Products chart
const TOP_PRODUCTS_LIMIT: usize = 10;

/// Landing page: KPI cards, top products and the revenue trend
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let (metrics, set_metrics) = signal(None::<MetricsResponse>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<ApiError>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_metrics().await {
                Ok(response) => {
                    set_metrics.set(Some(response));
                }
                Err(e) => {
                    if !e.is_no_data() {
                        log::error!("Failed to load product metrics: {}", e);
                    }
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let data_exists = Memo::new(move |_| {
        metrics.with(|m| m.as_ref().map(MetricsResponse::has_data).unwrap_or(false))
    });

    let kpi = move |pick: fn(&MetricsResponse) -> f64| {
        Signal::derive(move || metrics.with(|m| m.as_ref().map(pick)))
    };

    let top_products = Signal::derive(move || {
        let ranked = metrics.with(|m| {
            m.as_ref()
                .map(|m| m.top_products_ranked(TOP_PRODUCTS_LIMIT))
                .unwrap_or_default()
        });
        let colors = assign_colors(ranked.iter().map(|(name, _)| name), &VIBRANT_PALETTE);
        ranked
            .into_iter()
            .map(|(label, value)| {
                let color = colors.color_for(&label);
                BarDatum {
                    label,
                    value,
                    fill: color.fill.to_string(),
                    border: color.border.to_string(),
                }
            })
            .collect::<Vec<_>>()
    });

    let revenue_trend = Signal::derive(move || {
        metrics.with(|m| {
            m.as_ref()
                .map(MetricsResponse::revenue_trend)
                .unwrap_or_default()
        })
    });

    view! {
        <PageFrame page_id="d400_home--dashboard" category=PAGE_CAT_DASHBOARD>
            {move || {
                if loading.get() {
                    view! {
                        <div class="page__loading">
                            <span>"Analyzing AI readiness..."</span>
                        </div>
                    }
                        .into_any()
                } else if data_exists.get() {
                    view! {
                        <PageHeader
                            title="Dashboard"
                            subtitle="Latest performance across your product catalogue"
                        />
                        <div class="page__content">
                            <div class="stat-grid">
                                <StatCard
                                    label="Monthly Revenue"
                                    icon_name="dollar-sign"
                                    value=kpi(|m| m.latest_monthly_revenue)
                                    format=ValueFormat::Money
                                />
                                <StatCard
                                    label="Units Sold"
                                    icon_name="shopping-bag"
                                    value=kpi(|m| m.latest_units_sold)
                                    format=ValueFormat::Integer
                                />
                                <StatCard
                                    label="Stock on Hand"
                                    icon_name="package"
                                    value=kpi(|m| m.latest_stock_on_hand)
                                    format=ValueFormat::Integer
                                />
                            </div>
                            <div class="chart-grid">
                                <div class="chart-panel">
                                    <h3 class="chart-panel__title">"Top Products"</h3>
                                    <BarChart bars=top_products value_format=ValueFormat::Integer />
                                </div>
                                <div class="chart-panel">
                                    <h3 class="chart-panel__title">"Revenue Trend"</h3>
                                    <TrendChart
                                        points=revenue_trend
                                        label="Revenue"
                                        value_format=ValueFormat::Money
                                    />
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <NoDataWelcome error=error.get() /> }.into_any()
                }
            }}
        </PageFrame>
    }
}

/// Shown before any data was connected, and when metrics cannot be loaded
#[component]
fn NoDataWelcome(error: Option<ApiError>) -> impl IntoView {
    let technical_note = error.filter(ApiError::is_retryable_server).map(|e| {
        view! {
            <div class="welcome__note">
                {icon("alert-triangle")}
                <span>
                    {format!(
                        "{}. The analytics service is not responding; reload the page to try again.",
                        e,
                    )}
                </span>
            </div>
        }
    });

    view! {
        <div class="welcome">
            <div class="welcome__icon">{icon("sparkles")}</div>
            <h1 class="welcome__title">"Welcome to Sarah AI"</h1>
            <p class="welcome__text">
                "Connect your sales and inventory data to unlock AI-powered forecasts, "
                "restock plans and insights."
            </p>
            <A href="/data-connect">
                <span class="welcome__cta">
                    "Start by Connecting Data"
                    {icon("arrow-right")}
                </span>
            </A>
            {technical_note}
        </div>
    }
}
