pub mod dashboard;
pub mod insights_view;
pub mod restock_plan;
pub mod standard_view;

pub use dashboard::InventoryDashboard;
