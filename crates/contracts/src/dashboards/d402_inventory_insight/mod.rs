pub mod dto;
pub mod restock_plan;

pub use dto::{InsightItem, InventoryInsightResponse};
pub use restock_plan::{RestockLine, RestockPlan, RestockPlanStatus};
