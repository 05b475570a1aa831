use contracts::dashboards::d401_forecast::{
    product_options, ForecastMetric, ForecastPayload, ForecastQuery, RevenueForecastResponse,
    UnitsForecastResponse,
};
use contracts::shared::analytics::{
    merge_forecast, next_prediction, ForecastMergeError, MergedSeries, PredictionPoint,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, url_with_query};

pub async fn fetch_units(query: &ForecastQuery) -> Result<UnitsForecastResponse, ApiError> {
    get_json(&url_with_query(ForecastMetric::Units.endpoint(), query)).await
}

pub async fn fetch_revenue(query: &ForecastQuery) -> Result<RevenueForecastResponse, ApiError> {
    get_json(&url_with_query(ForecastMetric::Revenue.endpoint(), query)).await
}

/// What the forecast page draws for one response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastData {
    pub series: MergedSeries,
    pub next: Option<PredictionPoint>,
    /// (product id, name) sorted by name
    pub products: Vec<(String, String)>,
}

impl ForecastData {
    pub fn from_payload<P: ForecastPayload>(payload: &P) -> Result<Self, ForecastMergeError> {
        let predictions = payload.predictions();
        let series = merge_forecast(&payload.historical(), &predictions)?;
        Ok(Self {
            series,
            next: next_prediction(&predictions).cloned(),
            products: product_options(payload.product_names()),
        })
    }
}

/// Fetches the forecast of `metric` and aligns it for the chart. Predictions
/// without any history come back as `ApiError::Validation`.
pub async fn fetch_forecast(
    metric: ForecastMetric,
    query: &ForecastQuery,
) -> Result<ForecastData, ApiError> {
    let data = match metric {
        ForecastMetric::Units => ForecastData::from_payload(&fetch_units(query).await?),
        ForecastMetric::Revenue => ForecastData::from_payload(&fetch_revenue(query).await?),
    };
    data.map_err(|e| ApiError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forecast_data_from_units() {
        let response: UnitsForecastResponse = serde_json::from_value(json!({
            "products_name": {"P2": "Saw", "P1": "Drill"},
            "data": [
                {"product_id": "P1", "period": "Jan-2024", "units_sold": 7},
                {"product_id": "P1", "period": "Feb-2024", "units_sold": 9}
            ],
            "prediction": [{
                "product_id": "P1",
                "period": "Mar-2024",
                "target_name": "units_sold",
                "predictions": 10.0,
                "units_0_1": 6.0,
                "units_0_5": 10.0,
                "units_0_9": 14.0
            }]
        }))
        .unwrap();

        let data = ForecastData::from_payload(&response).unwrap();
        assert_eq!(data.series.len(), 3);
        assert_eq!(data.series.bridge, Some(1));
        assert_eq!(data.next.map(|p| p.point), Some(10.0));
        assert_eq!(data.products[0].1, "Drill");
    }

    #[test]
    fn test_predictions_without_history_are_rejected() {
        let response: UnitsForecastResponse = serde_json::from_value(json!({
            "data": [],
            "prediction": [{
                "product_id": "P1",
                "period": "Mar-2024",
                "target_name": "units_sold",
                "predictions": 10.0,
                "units_0_1": 6.0,
                "units_0_5": 10.0,
                "units_0_9": 14.0
            }]
        }))
        .unwrap();

        assert_eq!(
            ForecastData::from_payload(&response),
            Err(ForecastMergeError::EmptyHistory)
        );
    }
}
