pub mod analytics;
pub mod api_error;
pub mod request_ticket;
