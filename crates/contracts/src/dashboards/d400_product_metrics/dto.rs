use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::analytics::{chronological_series, ranked_top_products, TimeSeriesPoint};

/// Response of `GET /product/metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub latest_monthly_revenue: f64,
    #[serde(default)]
    pub latest_units_sold: f64,
    #[serde(default)]
    pub latest_stock_on_hand: f64,
    #[serde(default)]
    pub latest_top_products: f64,
    /// Revenue by period label
    #[serde(default)]
    pub monthly_revenue: HashMap<String, f64>,
    /// Units sold by product name
    #[serde(default)]
    pub top_products: HashMap<String, f64>,
    #[serde(default)]
    pub units_sold: HashMap<String, f64>,
    #[serde(default)]
    pub stock_on_hand: HashMap<String, f64>,
}

impl MetricsResponse {
    /// The backend answers with an empty object before any data was connected
    pub fn has_data(&self) -> bool {
        !(self.monthly_revenue.is_empty()
            && self.top_products.is_empty()
            && self.units_sold.is_empty()
            && self.stock_on_hand.is_empty())
    }

    /// Revenue trend in chronological order
    pub fn revenue_trend(&self) -> Vec<TimeSeriesPoint> {
        chronological_series(&self.monthly_revenue)
    }

    pub fn top_products_ranked(&self, limit: usize) -> Vec<(String, f64)> {
        ranked_top_products(&self.top_products, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_has_no_data() {
        let metrics: MetricsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!metrics.has_data());
    }

    #[test]
    fn test_metrics_views() {
        let metrics: MetricsResponse = serde_json::from_value(json!({
            "latest_monthly_revenue": 12500.5,
            "latest_units_sold": 320,
            "latest_stock_on_hand": 1200,
            "latest_top_products": 3,
            "monthly_revenue": {"Mar-2024": 3.0, "Jan-2024": 1.0, "Feb-2024": 2.0},
            "top_products": {"Drill": 10, "Saw": 30},
            "units_sold": {},
            "stock_on_hand": {}
        }))
        .unwrap();

        assert!(metrics.has_data());
        assert_eq!(metrics.latest_units_sold, 320.0);

        let trend: Vec<f64> = metrics.revenue_trend().iter().map(|p| p.value).collect();
        assert_eq!(trend, vec![1.0, 2.0, 3.0]);

        let top = metrics.top_products_ranked(5);
        assert_eq!(top[0], ("Saw".to_string(), 30.0));
    }
}
