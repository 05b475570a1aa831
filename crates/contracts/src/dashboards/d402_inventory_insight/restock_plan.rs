use serde::{Deserialize, Serialize};

use super::dto::InventoryInsightResponse;

/// Editable line of a restock plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockLine {
    pub id: String,
    pub product_name: String,
    pub current_stock: f64,
    pub forecasted_demand: f64,
}

/// Where the restock plan panel is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestockPlanStatus {
    #[default]
    Hidden,
    Reviewing,
    Placed,
}

impl RestockPlanStatus {
    pub fn generate(self) -> Self {
        match self {
            RestockPlanStatus::Hidden => RestockPlanStatus::Reviewing,
            other => other,
        }
    }

    pub fn execute(self) -> Self {
        match self {
            RestockPlanStatus::Reviewing => RestockPlanStatus::Placed,
            other => other,
        }
    }

    pub fn start_new(self) -> Self {
        match self {
            RestockPlanStatus::Placed => RestockPlanStatus::Hidden,
            other => other,
        }
    }
}

/// Restock lines proposed from an insight response, edited by the user
/// before execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestockPlan {
    lines: Vec<RestockLine>,
}

impl RestockPlan {
    /// One line per insight item with `replenishment_needed` as the initial demand
    pub fn from_insight(insight: &InventoryInsightResponse) -> Self {
        let lines = insight
            .inventory
            .iter()
            .enumerate()
            .map(|(index, item)| RestockLine {
                id: format!("item-{}", index),
                product_name: item.product_name.clone(),
                current_stock: item.stock_on_hand,
                forecasted_demand: item.replenishment_needed,
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[RestockLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sets the demand of line `id`; negative values are stored as 0.
    /// Returns false when there is no such line.
    pub fn update_demand(&mut self, id: &str, value: f64) -> bool {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.forecasted_demand = value;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Units to order over all lines
    pub fn total_units(&self) -> f64 {
        self.lines.iter().map(|l| l.forecasted_demand).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_inventory_insight::dto::InsightItem;

    fn item(name: &str, stock: f64, needed: f64) -> InsightItem {
        InsightItem {
            product_id: String::new(),
            product_name: name.to_string(),
            stock_on_hand: stock,
            prediction_3m: stock + needed,
            replenishment_needed: needed,
            revenue_3m: None,
            profit_3m: None,
        }
    }

    fn plan() -> RestockPlan {
        RestockPlan::from_insight(&InventoryInsightResponse {
            inventory: vec![item("Drill", 12.0, 28.0), item("Saw", 50.0, 5.0)],
            summary: String::new(),
        })
    }

    #[test]
    fn test_lines_from_insight() {
        let plan = plan();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.lines()[0].id, "item-0");
        assert_eq!(plan.lines()[1].id, "item-1");
        assert_eq!(plan.lines()[0].forecasted_demand, 28.0);
        assert_eq!(plan.total_units(), 33.0);
    }

    #[test]
    fn test_edit_and_remove() {
        let mut plan = plan();
        assert!(plan.update_demand("item-1", 15.0));
        assert!(plan.update_demand("item-0", -4.0));
        assert!(!plan.update_demand("item-9", 1.0));
        assert_eq!(plan.lines()[0].forecasted_demand, 0.0);
        assert_eq!(plan.total_units(), 15.0);

        assert!(plan.remove("item-0"));
        assert!(!plan.remove("item-0"));
        assert_eq!(plan.lines()[0].id, "item-1");

        assert!(plan.remove("item-1"));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_status_transitions() {
        let status = RestockPlanStatus::default();
        assert_eq!(status.execute(), RestockPlanStatus::Hidden);

        let status = status.generate();
        assert_eq!(status, RestockPlanStatus::Reviewing);
        assert_eq!(status.start_new(), RestockPlanStatus::Reviewing);

        let status = status.execute();
        assert_eq!(status, RestockPlanStatus::Placed);
        assert_eq!(status.generate(), RestockPlanStatus::Placed);
        assert_eq!(status.start_new(), RestockPlanStatus::Hidden);
    }
}
