use super::restock_plan::RestockPlanPanel;
use crate::dashboards::d402_inventory::api;
use crate::shared::charts::{BarSeries, MultiBarChart};
use crate::shared::components::table::ValueFormat;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use contracts::dashboards::d402_inventory_insight::InventoryInsightResponse;
use contracts::shared::request_ticket::RequestTicket;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Shown one after another while the analysis runs
pub const LOADING_MESSAGES: [&str; 5] = [
    "Analyzing historical sales data...",
    "Detecting seasonal patterns...",
    "Predicting future demand trends...",
    "Optimizing inventory levels...",
    "Generating actionable insights...",
];
const LOADING_MESSAGE_INTERVAL_MS: u32 = 800;

const CURRENT_STOCK_COLOR: &str = "rgba(99, 102, 241, 0.8)";
const REPLENISHMENT_COLOR: &str = "rgba(244, 63, 94, 0.8)";

pub fn next_message_index(index: usize) -> usize {
    (index + 1) % LOADING_MESSAGES.len()
}

/// AI restock analysis: stock vs replenishment chart, summary and restock plan
#[component]
pub fn InsightsView() -> impl IntoView {
    let (insight, set_insight) = signal(None::<InventoryInsightResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let message_index = RwSignal::new(0usize);
    let ticket = StoredValue::new(RequestTicket::new());

    let load = move || {
        let mut token = 0;
        ticket.update_value(|t| token = t.issue());
        set_loading.set(true);
        set_error.set(None);
        message_index.set(0);

        // Rotate the loading message until this request settles
        spawn_local(async move {
            loop {
                TimeoutFuture::new(LOADING_MESSAGE_INTERVAL_MS).await;
                let still_loading = loading.try_get_untracked().unwrap_or(false);
                let current = ticket.try_with_value(|t| t.is_latest(token)).unwrap_or(false);
                if !still_loading || !current {
                    break;
                }
                message_index.update(|i| *i = next_message_index(*i));
            }
        });

        spawn_local(async move {
            let result = api::fetch_insight().await;
            if !ticket.try_with_value(|t| t.is_latest(token)).unwrap_or(false) {
                log::debug!("dropping stale inventory insight (request {})", token);
                return;
            }
            match result {
                Ok(response) => set_insight.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load inventory insight: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let labels = Signal::derive(move || {
        insight.with(|i| i.as_ref().map(|i| i.product_names()).unwrap_or_default())
    });
    let series = Signal::derive(move || {
        insight.with(|i| {
            i.as_ref()
                .map(|i| {
                    vec![
                        BarSeries {
                            name: "Current Stock".to_string(),
                            color: CURRENT_STOCK_COLOR.to_string(),
                            values: i.stock_series(),
                        },
                        BarSeries {
                            name: "Replenishment Needed".to_string(),
                            color: REPLENISHMENT_COLOR.to_string(),
                            values: i.replenishment_series(),
                        },
                    ]
                })
                .unwrap_or_default()
        })
    });
    let summary_html = Memo::new(move |_| {
        insight.with(|i| i.as_ref().map(|i| render_markdown(&i.summary)).unwrap_or_default())
    });

    view! {
        <div class="insights">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="insights__title">
                    {icon("sparkles")}
                    "AI Inventory Insights"
                </h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading
                    on_click=move |_| {
                        log::info!("refreshing inventory insight");
                        load();
                    }
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </Flex>

            {move || error.get().map(|e| view! {
                <div class="page__error">
                    {icon("alert-triangle")}
                    <span>{e}</span>
                </div>
            })}

            <Show
                when=move || !loading.get()
                fallback=move || view! {
                    <div class="insights__loading">
                        <Spinner />
                        <span>{move || LOADING_MESSAGES[message_index.get() % LOADING_MESSAGES.len()]}</span>
                    </div>
                }
            >
                <Show when=move || insight.with(Option::is_some)>
                    <div class="chart-panel">
                        <h3 class="chart-panel__title">"Current Stock vs Replenishment Needed"</h3>
                        <MultiBarChart
                            labels=labels
                            series=series
                            value_format=ValueFormat::Integer
                            stacked=true
                        />
                    </div>

                    <div class="chart-panel insights__summary">
                        <h3 class="chart-panel__title">"AI Summary"</h3>
                        <div class="markdown" inner_html=move || summary_html.get()></div>
                    </div>

                    <RestockPlanPanel insight=insight />
                </Show>
            </Show>
        </div>
    }
}
