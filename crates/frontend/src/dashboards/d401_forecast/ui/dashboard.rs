use crate::dashboards::d401_forecast::api::{self, ForecastData};
use crate::shared::charts::ForecastChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_value, ValueFormat};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_forecast::{ForecastMetric, ForecastQuery};
use contracts::shared::request_ticket::RequestTicket;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn metric_format(metric: ForecastMetric) -> ValueFormat {
    if metric.is_money() {
        ValueFormat::Money
    } else {
        ValueFormat::Integer
    }
}

fn metric_title(metric: ForecastMetric) -> &'static str {
    match metric {
        ForecastMetric::Units => "Units Sold",
        ForecastMetric::Revenue => "Revenue",
    }
}

/// Units / revenue forecast with the product filter
#[component]
pub fn ForecastDashboard() -> impl IntoView {
    let metric = RwSignal::new(ForecastMetric::default());
    let product = RwSignal::new(ForecastQuery::ALL_PRODUCTS.to_string());

    let (data, set_data) = signal(ForecastData::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    // Product names survive filtered responses, which only name one product
    let products = RwSignal::new(Vec::<(String, String)>::new());
    let ticket = StoredValue::new(RequestTicket::new());

    Effect::new(move |_| {
        let current_metric = metric.get();
        let query = ForecastQuery::for_selection(&product.get());
        let token = {
            let mut issued = 0;
            ticket.update_value(|t| issued = t.issue());
            issued
        };
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_forecast(current_metric, &query).await;
            if !ticket.with_value(|t| t.is_latest(token)) {
                log::debug!(
                    "dropping stale {} forecast response (request {})",
                    current_metric.label(),
                    token
                );
                return;
            }
            match result {
                Ok(forecast) => {
                    if products.with_untracked(Vec::is_empty) && !forecast.products.is_empty() {
                        products.set(forecast.products.clone());
                    }
                    set_error.set(None);
                    set_data.set(forecast);
                }
                Err(e) => {
                    log::error!("Failed to load {} forecast: {}", current_metric.label(), e);
                    set_error.set((!e.is_no_data()).then(|| e.to_string()));
                    set_data.set(ForecastData::default());
                }
            }
            set_loading.set(false);
        });
    });

    let series = Signal::derive(move || data.with(|d| d.series.clone()));
    let value_format = move || metric_format(metric.get());

    let metric_button = move |target: ForecastMetric| {
        let appearance = Signal::derive(move || {
            if metric.get() == target {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        });
        view! {
            <Button appearance=appearance on_click=move |_| metric.set(target)>
                {target.label()}
            </Button>
        }
    };

    let next_tile = move || {
        let fmt = value_format();
        data.with(|d| d.next.clone()).map(|next| {
            view! {
                <div class="forecast-next">
                    <div class="forecast-next__icon">{icon("trending-up")}</div>
                    <div class="forecast-next__body">
                        <div class="forecast-next__label">"Next Month Prediction"</div>
                        <div class="forecast-next__value">{format_value(next.point, fmt)}</div>
                        <div class="forecast-next__range">
                            {format!(
                                "{}: {} to {}",
                                next.period,
                                format_value(next.lower, fmt),
                                format_value(next.upper, fmt),
                            )}
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id="d401_forecast--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Forecasting" subtitle="Predicted demand with a 10-90% confidence band">
                <Space>
                    {metric_button(ForecastMetric::Units)}
                    {metric_button(ForecastMetric::Revenue)}
                </Space>
                <Select value=product>
                    <option value=ForecastQuery::ALL_PRODUCTS>"All Products"</option>
                    <For
                        each=move || products.get()
                        key=|(id, _)| id.clone()
                        children=move |(id, name): (String, String)| {
                            view! { <option value=id>{name}</option> }
                        }
                    />
                </Select>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="page__error">
                        {icon("alert-triangle")}
                        <span>{e}</span>
                    </div>
                })}

                {next_tile}

                <div class="chart-panel">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3 class="chart-panel__title">
                            {move || format!("{} Forecast", metric_title(metric.get()))}
                        </h3>
                        <Show when=move || loading.get()>
                            <span class="chart-panel__status">
                                <Spinner size=SpinnerSize::Small />
                                "Updating..."
                            </span>
                        </Show>
                    </Flex>
                    {move || {
                        if loading.get() && data.with(|d| d.series.is_empty()) {
                            view! { <div class="chart-empty">"Loading data..."</div> }.into_any()
                        } else {
                            let fmt = value_format();
                            view! {
                                <ForecastChart
                                    series=series
                                    metric_label=metric_title(metric.get())
                                    value_format=fmt
                                />
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_format() {
        assert_eq!(metric_format(ForecastMetric::Revenue), ValueFormat::Money);
        assert_eq!(metric_format(ForecastMetric::Units), ValueFormat::Integer);
        assert_eq!(metric_title(ForecastMetric::Units), "Units Sold");
    }
}
