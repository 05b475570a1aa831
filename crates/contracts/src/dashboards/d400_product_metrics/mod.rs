pub mod dto;

pub use dto::MetricsResponse;
