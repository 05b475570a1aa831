//! Sidebar with one entry per top-level page. The active entry follows the
//! router location.

use crate::routes::AppPage;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<AppPage>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            items: vec![AppPage::Home, AppPage::Chat],
        },
        MenuGroup {
            id: "planning",
            label: "Planning",
            items: vec![AppPage::Forecasting, AppPage::Inventory],
        },
        MenuGroup {
            id: "data",
            label: "Data",
            items: vec![AppPage::DataConnect],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let active_page = Memo::new(move |_| AppPage::from_path(&location.pathname.get()));

    Effect::new(move |_| {
        if let Some(page) = active_page.get() {
            log::info!("navigated to {}", page.label());
        }
    });

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group" data-group=group.id>
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|page| {
                            view! {
                                <A href=page.path()>
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || active_page.get() == Some(page)
                                        style:padding-left="12px"
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(page.icon())}
                                            <span>{page.label()}</span>
                                        </div>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
