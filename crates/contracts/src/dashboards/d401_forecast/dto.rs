use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::analytics::{PredictionPoint, TimeSeriesPoint};

/// What a forecast chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForecastMetric {
    #[default]
    Units,
    Revenue,
}

impl ForecastMetric {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ForecastMetric::Units => "/forecast/units",
            ForecastMetric::Revenue => "/forecast/revenue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastMetric::Units => "Units",
            ForecastMetric::Revenue => "Revenue",
        }
    }

    pub fn is_money(&self) -> bool {
        matches!(self, ForecastMetric::Revenue)
    }
}

/// Query of both forecast endpoints. No `product_id` means all products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

impl ForecastQuery {
    pub const ALL_PRODUCTS: &'static str = "All";

    /// Query for the product selector value; "All" drops the filter
    pub fn for_selection(selection: &str) -> Self {
        let product_id = (!selection.is_empty() && selection != Self::ALL_PRODUCTS)
            .then(|| selection.to_string());
        Self { product_id }
    }
}

/// Common view over the units and revenue forecast responses
pub trait ForecastPayload {
    fn metric(&self) -> ForecastMetric;

    /// Product id → display name
    fn product_names(&self) -> &HashMap<String, String>;

    /// Observed values, in the order the backend returned them
    fn historical(&self) -> Vec<TimeSeriesPoint>;

    fn predictions(&self) -> Vec<PredictionPoint>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitsDataItem {
    pub product_id: String,
    pub period: String,
    pub units_sold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitsPredictionItem {
    pub product_id: String,
    pub period: String,
    pub target_name: String,
    pub predictions: f64,
    pub units_0_1: f64,
    pub units_0_5: f64,
    pub units_0_9: f64,
}

/// Response of `GET /forecast/units`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitsForecastResponse {
    #[serde(default)]
    pub products_name: HashMap<String, String>,
    pub data: Vec<UnitsDataItem>,
    pub prediction: Vec<UnitsPredictionItem>,
}

impl ForecastPayload for UnitsForecastResponse {
    fn metric(&self) -> ForecastMetric {
        ForecastMetric::Units
    }

    fn product_names(&self) -> &HashMap<String, String> {
        &self.products_name
    }

    fn historical(&self) -> Vec<TimeSeriesPoint> {
        self.data
            .iter()
            .map(|d| TimeSeriesPoint::new(d.period.clone(), d.units_sold))
            .collect()
    }

    fn predictions(&self) -> Vec<PredictionPoint> {
        self.prediction
            .iter()
            .map(|p| PredictionPoint {
                period: p.period.clone(),
                point: p.predictions,
                lower: p.units_0_1,
                upper: p.units_0_9,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDataItem {
    pub product_id: String,
    pub period: String,
    pub revenue: f64,
    pub units_sold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePredictionItem {
    pub product_id: String,
    pub period: String,
    pub target_name: String,
    pub predictions: f64,
    pub revenue_0_1: f64,
    pub revenue_0_5: f64,
    #[serde(rename = "revenue_0.9")]
    pub revenue_0_9: f64,
}

/// Response of `GET /forecast/revenue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueForecastResponse {
    #[serde(default)]
    pub products_name: HashMap<String, String>,
    pub data: Vec<RevenueDataItem>,
    pub prediction: Vec<RevenuePredictionItem>,
}

impl ForecastPayload for RevenueForecastResponse {
    fn metric(&self) -> ForecastMetric {
        ForecastMetric::Revenue
    }

    fn product_names(&self) -> &HashMap<String, String> {
        &self.products_name
    }

    fn historical(&self) -> Vec<TimeSeriesPoint> {
        self.data
            .iter()
            .map(|d| TimeSeriesPoint::new(d.period.clone(), d.revenue))
            .collect()
    }

    fn predictions(&self) -> Vec<PredictionPoint> {
        self.prediction
            .iter()
            .map(|p| PredictionPoint {
                period: p.period.clone(),
                point: p.predictions,
                lower: p.revenue_0_1,
                upper: p.revenue_0_9,
            })
            .collect()
    }
}

/// Product selector entries sorted by display name
pub fn product_options(names: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = names
        .iter()
        .map(|(id, name)| (id.clone(), name.clone()))
        .collect();
    options.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::merge_forecast;
    use serde_json::json;

    fn revenue_response() -> RevenueForecastResponse {
        serde_json::from_value(json!({
            "products_name": {"P1": "Drill", "P2": "Anchor"},
            "data": [
                {"product_id": "P1", "period": "Jan-2024", "revenue": 100.0, "units_sold": 10},
                {"product_id": "P1", "period": "Feb-2024", "revenue": 120.0, "units_sold": 12}
            ],
            "prediction": [
                {
                    "product_id": "P1",
                    "period": "Mar-2024",
                    "target_name": "revenue",
                    "predictions": 130.0,
                    "revenue_0_1": 110.0,
                    "revenue_0_5": 129.0,
                    "revenue_0.9": 150.0
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_revenue_payload() {
        let response = revenue_response();
        assert_eq!(response.metric(), ForecastMetric::Revenue);

        let predictions = response.predictions();
        assert_eq!(predictions[0].point, 130.0);
        assert_eq!(predictions[0].lower, 110.0);
        assert_eq!(predictions[0].upper, 150.0);

        let merged = merge_forecast(&response.historical(), &predictions).unwrap();
        assert_eq!(merged.predicted, vec![None, Some(120.0), Some(130.0)]);
    }

    #[test]
    fn test_units_payload() {
        let response: UnitsForecastResponse = serde_json::from_value(json!({
            "products_name": {},
            "data": [{"product_id": "P1", "period": "Jan-2024", "units_sold": 7}],
            "prediction": [{
                "product_id": "P1",
                "period": "Feb-2024",
                "target_name": "units_sold",
                "predictions": 8.0,
                "units_0_1": 5.0,
                "units_0_5": 8.0,
                "units_0_9": 11.0
            }]
        }))
        .unwrap();

        assert_eq!(response.historical()[0].value, 7.0);
        assert_eq!(response.predictions()[0].upper, 11.0);
        assert_eq!(response.metric().endpoint(), "/forecast/units");
    }

    #[test]
    fn test_query_and_options() {
        assert_eq!(ForecastQuery::for_selection("All").product_id, None);
        assert_eq!(ForecastQuery::for_selection("").product_id, None);
        assert_eq!(
            ForecastQuery::for_selection("P2").product_id.as_deref(),
            Some("P2")
        );

        let options = product_options(&revenue_response().products_name);
        assert_eq!(
            options,
            vec![
                ("P2".to_string(), "Anchor".to_string()),
                ("P1".to_string(), "Drill".to_string())
            ]
        );
    }
}
