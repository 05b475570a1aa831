pub mod routes;

pub use routes::{AppPage, AppRoutes};
