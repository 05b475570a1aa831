pub mod aggregate;

pub use aggregate::InventoryRecord;
