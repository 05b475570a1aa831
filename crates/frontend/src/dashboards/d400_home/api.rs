use contracts::dashboards::d400_product_metrics::MetricsResponse;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, get_json};

/// Get the KPI snapshot, top products and revenue trend
pub async fn get_metrics() -> Result<MetricsResponse, ApiError> {
    get_json(&api_url("/product/metrics")).await
}
