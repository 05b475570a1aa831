pub mod dashboard;

pub use dashboard::HomeDashboard;
