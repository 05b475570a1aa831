use serde::{Deserialize, Serialize};

/// One product of the AI restock analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightItem {
    #[serde(default)]
    pub product_id: String,
    pub product_name: String,
    pub stock_on_hand: f64,
    /// Forecast demand over the next three months
    #[serde(default)]
    pub prediction_3m: f64,
    pub replenishment_needed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_3m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_3m: Option<f64>,
}

/// Response of `GET /inventory/insight`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryInsightResponse {
    #[serde(default)]
    pub inventory: Vec<InsightItem>,
    /// Markdown
    #[serde(default)]
    pub summary: String,
}

impl InventoryInsightResponse {
    pub fn product_names(&self) -> Vec<String> {
        self.inventory.iter().map(|i| i.product_name.clone()).collect()
    }

    pub fn stock_series(&self) -> Vec<f64> {
        self.inventory.iter().map(|i| i.stock_on_hand).collect()
    }

    pub fn replenishment_series(&self) -> Vec<f64> {
        self.inventory.iter().map(|i| i.replenishment_needed).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_insight() {
        let response: InventoryInsightResponse = serde_json::from_value(json!({
            "inventory": [
                {
                    "product_id": "P1",
                    "product_name": "Drill",
                    "stock_on_hand": 12,
                    "prediction_3m": 40,
                    "replenishment_needed": 28,
                    "revenue_3m": 480.0
                },
                {
                    "product_name": "Saw",
                    "stock_on_hand": 50,
                    "replenishment_needed": 0
                }
            ],
            "summary": "## Restock\n* Drill is running low"
        }))
        .unwrap();

        assert_eq!(response.product_names(), vec!["Drill", "Saw"]);
        assert_eq!(response.stock_series(), vec![12.0, 50.0]);
        assert_eq!(response.replenishment_series(), vec![28.0, 0.0]);
        assert_eq!(response.inventory[0].revenue_3m, Some(480.0));
        assert_eq!(response.inventory[1].profit_3m, None);
    }
}
