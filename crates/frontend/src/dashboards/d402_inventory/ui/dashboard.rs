use super::insights_view::InsightsView;
use super::standard_view::StandardView;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryMode {
    Standard,
    Insights,
}

impl InventoryMode {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryMode::Standard => "Standard",
            InventoryMode::Insights => "AI Insights",
        }
    }
}

/// Inventory page with the standard metrics and the AI insight view
#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let mode = RwSignal::new(InventoryMode::Standard);

    let mode_button = move |target: InventoryMode| {
        let appearance = Signal::derive(move || {
            if mode.get() == target {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        });
        view! {
            <Button
                appearance=appearance
                on_click=move |_| {
                    log::info!("inventory view: {}", target.label());
                    mode.set(target);
                }
            >
                {target.label()}
            </Button>
        }
    };

    view! {
        <PageFrame page_id="d402_inventory--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Inventory" subtitle="Stock value, sell-through and AI restock planning">
                <Space>
                    {mode_button(InventoryMode::Standard)}
                    {mode_button(InventoryMode::Insights)}
                </Space>
            </PageHeader>
            <div class="page__content">
                {move || match mode.get() {
                    InventoryMode::Standard => view! { <StandardView /> }.into_any(),
                    InventoryMode::Insights => view! { <InsightsView /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
