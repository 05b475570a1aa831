use crate::shared::components::table::format_number_int;
use crate::shared::icons::icon;
use contracts::dashboards::d402_inventory_insight::{
    InventoryInsightResponse, RestockLine, RestockPlan, RestockPlanStatus,
};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Demand typed into a plan row as a whole unit count.
///
/// Reads the leading integer ("12.7" is 12); anything else counts as 0.
fn parse_demand(raw: &str) -> f64 {
    let raw = raw.trim();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits_len = raw[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len() - sign_len);
    raw[..sign_len + digits_len].parse::<i64>().unwrap_or(0) as f64
}

/// Generate, review and execute the AI restock plan built from the latest insight
#[component]
pub fn RestockPlanPanel(
    #[prop(into)] insight: Signal<Option<InventoryInsightResponse>>,
) -> impl IntoView {
    let status = RwSignal::new(RestockPlanStatus::default());
    let plan = RwSignal::new(RestockPlan::default());

    let on_generate = move |_: ev::MouseEvent| {
        let Some(new_plan) = insight.with(|i| i.as_ref().map(RestockPlan::from_insight)) else {
            return;
        };
        log::info!("restock plan generated with {} lines", new_plan.len());
        plan.set(new_plan);
        status.update(|s| *s = s.generate());
    };

    let on_execute = move |_: ev::MouseEvent| {
        log::info!(
            "restock plan executed: {} lines, {} units",
            plan.with_untracked(RestockPlan::len),
            plan.with_untracked(RestockPlan::total_units)
        );
        status.update(|s| *s = s.execute());
    };

    let on_start_new = move |_: ev::MouseEvent| {
        plan.set(RestockPlan::default());
        status.update(|s| *s = s.start_new());
    };

    let row = move |line: RestockLine| {
        let id_for_edit = line.id.clone();
        let id_for_remove = line.id.clone();
        view! {
            <TableRow>
                <TableCell>{line.product_name}</TableCell>
                <TableCell>{format_number_int(line.current_stock)}</TableCell>
                <TableCell>
                    <input
                        class="restock-plan__demand"
                        type="number"
                        min="0"
                        prop:value=line.forecasted_demand.to_string()
                        on:change=move |ev| {
                            let value = parse_demand(&event_target_value(&ev));
                            plan.update(|p| {
                                p.update_demand(&id_for_edit, value);
                            });
                        }
                    />
                </TableCell>
                <TableCell>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            plan.update(|p| {
                                p.remove(&id_for_remove);
                            });
                        }
                    >
                        {icon("trash")}
                    </Button>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="restock-plan">
            {move || match status.get() {
                RestockPlanStatus::Hidden => view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || insight.with(|i| i.is_none()))
                        on_click=on_generate
                    >
                        {icon("sparkles")}
                        "Generate AI Restock Plan"
                    </Button>
                }
                    .into_any(),
                RestockPlanStatus::Reviewing => view! {
                    <div class="chart-panel">
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <h3 class="chart-panel__title">"Review Restock Plan"</h3>
                            <span class="restock-plan__total">
                                {move || format!(
                                    "{} units in {} lines",
                                    format_number_int(plan.with(RestockPlan::total_units)),
                                    plan.with(RestockPlan::len),
                                )}
                            </span>
                        </Flex>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Current Stock"</TableHeaderCell>
                                    <TableHeaderCell>"Forecasted Demand"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || plan.with(|p| p.lines().to_vec())
                                    key=|line| line.id.clone()
                                    children=row
                                />
                            </TableBody>
                        </Table>
                        <div class="restock-plan__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || plan.with(RestockPlan::is_empty))
                                on_click=on_execute
                            >
                                {icon("check-circle")}
                                "Execute AI Restock Plan"
                            </Button>
                        </div>
                    </div>
                }
                    .into_any(),
                RestockPlanStatus::Placed => view! {
                    <div class="restock-plan__success">
                        <div class="restock-plan__success-icon">{icon("check-circle")}</div>
                        <h3>"Order Placed Successfully!"</h3>
                        <p>
                            {move || format!(
                                "{} units across {} products have been ordered.",
                                format_number_int(plan.with(RestockPlan::total_units)),
                                plan.with(RestockPlan::len),
                            )}
                        </p>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_start_new>
                            "Start New Plan"
                        </Button>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demand() {
        assert_eq!(parse_demand("12"), 12.0);
        assert_eq!(parse_demand("12.7"), 12.0);
        assert_eq!(parse_demand(" 7.5 "), 7.0);
        assert_eq!(parse_demand("40 units"), 40.0);
        assert_eq!(parse_demand("-3"), -3.0);
        assert_eq!(parse_demand("-"), 0.0);
        assert_eq!(parse_demand(""), 0.0);
        assert_eq!(parse_demand("abc"), 0.0);
    }
}
