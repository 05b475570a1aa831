pub mod dto;

pub use dto::{
    product_options, ForecastMetric, ForecastPayload, ForecastQuery, RevenueForecastResponse,
    UnitsForecastResponse,
};
