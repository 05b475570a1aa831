use crate::dashboards::d402_inventory::api;
use crate::shared::charts::{BarChart, BarDatum, DoughnutChart, DoughnutDatum};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_number_int, format_percent, ValueFormat};
use crate::shared::icons::icon;
use contracts::domain::a001_inventory::InventoryRecord;
use contracts::shared::analytics::{
    aggregate_by_category, assign_colors, overall_sell_through, total_inventory_value,
    CategoryBreakdown, CategoryColors, LowStockDetector, VIBRANT_PALETTE,
};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Everything the standard view derives from one inventory snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryMetrics {
    pub total_value: f64,
    pub sell_through: f64,
    pub low_stock: Vec<InventoryRecord>,
    pub breakdown: CategoryBreakdown,
    pub colors: CategoryColors,
}

impl InventoryMetrics {
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        let breakdown = aggregate_by_category(records);
        let colors = assign_colors(breakdown.categories(), &VIBRANT_PALETTE);
        Self {
            total_value: total_inventory_value(records),
            sell_through: overall_sell_through(records),
            low_stock: LowStockDetector::default()
                .filter(records)
                .into_iter()
                .cloned()
                .collect(),
            breakdown,
            colors,
        }
    }

    pub fn value_slices(&self) -> Vec<DoughnutDatum> {
        self.breakdown
            .iter()
            .map(|bucket| {
                let color = self.colors.color_for(&bucket.category);
                DoughnutDatum {
                    label: bucket.category.clone(),
                    value: bucket.value,
                    fill: color.fill.to_string(),
                    border: color.border.to_string(),
                }
            })
            .collect()
    }

    pub fn sell_through_bars(&self) -> Vec<BarDatum> {
        self.breakdown
            .iter()
            .map(|bucket| {
                let color = self.colors.color_for(&bucket.category);
                BarDatum {
                    label: bucket.category.clone(),
                    value: bucket.sell_through(),
                    fill: color.fill.to_string(),
                    border: color.border.to_string(),
                }
            })
            .collect()
    }
}

#[component]
pub fn StandardView() -> impl IntoView {
    let (metrics, set_metrics) = signal(None::<InventoryMetrics>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<ApiError>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_inventory().await {
                Ok(records) => {
                    set_metrics.set(Some(InventoryMetrics::from_records(&records)));
                }
                Err(e) => {
                    log::error!("Failed to load inventory: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let pick = move |f: fn(&InventoryMetrics) -> f64| {
        Signal::derive(move || metrics.with(|m| m.as_ref().map(f)))
    };
    let low_stock_count =
        Signal::derive(move || metrics.with(|m| m.as_ref().map(|m| m.low_stock.len() as f64)));
    let slices = Signal::derive(move || {
        metrics.with(|m| m.as_ref().map(InventoryMetrics::value_slices).unwrap_or_default())
    });
    let bars = Signal::derive(move || {
        metrics.with(|m| {
            m.as_ref()
                .map(InventoryMetrics::sell_through_bars)
                .unwrap_or_default()
        })
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! {
            <div class="page__loading">
                <Spinner />
                <span>"Loading inventory..."</span>
            </div>
        }>
            {move || error.get().map(|e| {
                let message = if e.is_no_data() {
                    "No inventory data yet. Connect your data to see stock metrics.".to_string()
                } else {
                    e.to_string()
                };
                view! {
                    <div class="page__error">
                        {icon("alert-triangle")}
                        <span>{message}</span>
                    </div>
                }
            })}

            <div class="stat-grid">
                <StatCard
                    label="Total Inventory Value"
                    icon_name="dollar-sign"
                    value=pick(|m| m.total_value)
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Sell-Through Rate"
                    icon_name="trending-up"
                    value=pick(|m| m.sell_through)
                    format=ValueFormat::Percent { decimals: 1 }
                />
                <StatCard
                    label="Low Stock Items"
                    icon_name="alert-triangle"
                    value=low_stock_count
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Products below 20% stock".to_string()))
                    variant="stat-card--warning"
                />
            </div>

            <div class="chart-grid">
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Inventory Value by Category"</h3>
                    <DoughnutChart slices=slices value_format=ValueFormat::Money />
                </div>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Sell-Through Rate by Category"</h3>
                    <BarChart
                        bars=bars
                        value_format=ValueFormat::Percent { decimals: 1 }
                        max=100.0
                    />
                </div>
            </div>

            <Show when=move || metrics.with(|m| m.as_ref().map(|m| !m.low_stock.is_empty()).unwrap_or(false))>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Low Stock Products"</h3>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Period"</TableHeaderCell>
                                <TableHeaderCell>"Opening Stock"</TableHeaderCell>
                                <TableHeaderCell>"Stock on Hand"</TableHeaderCell>
                                <TableHeaderCell>"Remaining"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || metrics.with(|m| {
                                m.as_ref()
                                    .map(|m| m.low_stock.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|r| {
                                        let remaining = if r.opening_stock > 0.0 {
                                            r.stock_on_hand / r.opening_stock * 100.0
                                        } else {
                                            0.0
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell>{r.product_name}</TableCell>
                                                <TableCell>{r.category}</TableCell>
                                                <TableCell>{r.period}</TableCell>
                                                <TableCell>{format_number_int(r.opening_stock)}</TableCell>
                                                <TableCell>{format_number_int(r.stock_on_hand)}</TableCell>
                                                <TableCell>{format_percent(remaining, 1)}</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </TableBody>
                    </Table>
                </div>
            </Show>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, category: &str, sold: f64, opening: f64, received: f64, on_hand: f64) -> InventoryRecord {
        serde_json::from_value(json!({
            "Product_ID": name,
            "Product_Name": name,
            "Category": category,
            "Period": "Jan-2024",
            "Current_Price": 10.0,
            "Opening_Price": 10.0,
            "Cost_Per_Unit": 2.0,
            "Units_Sold": sold,
            "Opening_Stock": opening,
            "Stock_Received": received,
            "Stock_On_Hand": on_hand,
            "Revenue": sold * 10.0
        }))
        .unwrap()
    }

    #[test]
    fn test_metrics_from_records() {
        let records = vec![
            record("Drill", "Tools", 30.0, 50.0, 50.0, 70.0),
            record("Bolt", "Hardware", 95.0, 100.0, 0.0, 5.0),
            record("Saw", "Tools", 10.0, 40.0, 10.0, 40.0),
        ];
        let metrics = InventoryMetrics::from_records(&records);

        assert_eq!(metrics.total_value, 230.0);
        assert_eq!(metrics.low_stock.len(), 1);
        assert_eq!(metrics.low_stock[0].product_name, "Bolt");

        let bars = metrics.sell_through_bars();
        assert_eq!(bars[0].label, "Tools");
        assert_eq!(bars[1].label, "Hardware");
        assert_eq!(bars[1].value, 95.0);

        let slices = metrics.value_slices();
        assert_eq!(slices[0].value, 220.0);
        assert_eq!(slices[0].fill, bars[0].fill);
        assert_ne!(slices[0].fill, slices[1].fill);
    }

    #[test]
    fn test_empty_snapshot() {
        let metrics = InventoryMetrics::from_records(&[]);
        assert_eq!(metrics.total_value, 0.0);
        assert!(metrics.value_slices().is_empty());
        assert!(metrics.low_stock.is_empty());
    }
}
