use crate::dashboards::d400_home::ui::HomeDashboard;
use crate::dashboards::d401_forecast::ui::ForecastDashboard;
use crate::dashboards::d402_inventory::ui::InventoryDashboard;
use crate::domain::a002_chat::ui::ChatPage;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::usecases::u501_data_connect::DataConnectPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Home,
    Chat,
    Forecasting,
    Inventory,
    DataConnect,
}

impl AppPage {
    pub const ALL: [AppPage; 5] = [
        AppPage::Home,
        AppPage::Chat,
        AppPage::Forecasting,
        AppPage::Inventory,
        AppPage::DataConnect,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppPage::Home => "/",
            AppPage::Chat => "/chat",
            AppPage::Forecasting => "/forecasting",
            AppPage::Inventory => "/inventory",
            AppPage::DataConnect => "/data-connect",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppPage::Home => "Home",
            AppPage::Chat => "Chat",
            AppPage::Forecasting => "Forecasting",
            AppPage::Inventory => "Inventory",
            AppPage::DataConnect => "Data Connect",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppPage::Home => "home",
            AppPage::Chat => "message-square",
            AppPage::Forecasting => "trending-up",
            AppPage::Inventory => "package",
            AppPage::DataConnect => "database",
        }
    }

    /// Page owning `pathname`; unknown paths have none
    pub fn from_path(pathname: &str) -> Option<AppPage> {
        let trimmed = pathname.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|p| p.path() == normalized)
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content not-found">
                <h2>"Page not found"</h2>
                <a href=AppPage::Home.path()>"Back to Home"</a>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! {
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomeDashboard />
                        <Route path=path!("/chat") view=ChatPage />
                        <Route path=path!("/forecasting") view=ForecastDashboard />
                        <Route path=path!("/inventory") view=InventoryDashboard />
                        <Route path=path!("/data-connect") view=DataConnectPage />
                    </Routes>
                }.into_any()
            />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppPage::from_path("/"), Some(AppPage::Home));
        assert_eq!(AppPage::from_path(""), Some(AppPage::Home));
        assert_eq!(AppPage::from_path("/chat"), Some(AppPage::Chat));
        assert_eq!(AppPage::from_path("/inventory/"), Some(AppPage::Inventory));
        assert_eq!(AppPage::from_path("/data-connect"), Some(AppPage::DataConnect));
        assert_eq!(AppPage::from_path("/nope"), None);
    }

    #[test]
    fn test_paths_are_unique() {
        for a in AppPage::ALL {
            for b in AppPage::ALL {
                if a != b {
                    assert_ne!(a.path(), b.path());
                }
            }
        }
    }
}
