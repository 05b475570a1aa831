pub mod common;
pub mod u501_data_connect;
