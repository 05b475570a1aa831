pub mod d400_home;
pub mod d401_forecast;
pub mod d402_inventory;

pub use d400_home::ui::HomeDashboard;
pub use d401_forecast::ui::ForecastDashboard;
pub use d402_inventory::ui::InventoryDashboard;
