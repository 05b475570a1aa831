//! Derived metrics computed in the browser from raw inventory and forecast
//! data. Everything here is pure and synchronous.

pub mod category_totals;
pub mod forecast_series;
pub mod low_stock;
pub mod palette;
pub mod period_order;
pub mod ranking;
pub mod sell_through;

pub use category_totals::{
    aggregate_by_category, total_inventory_value, CategoryBreakdown, CategoryTotals,
};
pub use forecast_series::{
    merge_forecast, next_prediction, ForecastMergeError, MergedSeries, PredictionPoint,
    SeriesTrack, TimeSeriesPoint, PREDICTION_POINT_HOVER_RADIUS, PREDICTION_POINT_RADIUS,
};
pub use low_stock::{LowStockDetector, DEFAULT_LOW_STOCK_THRESHOLD};
pub use palette::{assign_colors, CategoryColor, CategoryColors, FALLBACK_COLOR, VIBRANT_PALETTE};
pub use period_order::{chronological_series, period_key, sort_periods, sorted_periods};
pub use ranking::ranked_top_products;
pub use sell_through::{overall_sell_through, sell_through};
