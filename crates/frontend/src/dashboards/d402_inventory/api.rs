use contracts::dashboards::d402_inventory_insight::InventoryInsightResponse;
use contracts::domain::a001_inventory::InventoryRecord;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, get_json};

/// Current inventory snapshot, one record per product and period
pub async fn fetch_inventory() -> Result<Vec<InventoryRecord>, ApiError> {
    get_json(&api_url("/inventory")).await
}

/// AI restock analysis. Slow: the service runs the forecast and the summary on demand.
pub async fn fetch_insight() -> Result<InventoryInsightResponse, ApiError> {
    get_json(&api_url("/inventory/insight")).await
}
