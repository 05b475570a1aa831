pub mod d400_product_metrics;
pub mod d401_forecast;
pub mod d402_inventory_insight;
