//! Shared contracts between the dashboard frontend and the supply-chain API.
//!
//! - `domain`: records owned by the external services (inventory, chat)
//! - `dashboards`: response DTOs consumed by dashboard pages
//! - `usecases`: client-side use-case rules (data upload)
//! - `shared`: derived-metrics layer, API error taxonomy, request tickets

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
