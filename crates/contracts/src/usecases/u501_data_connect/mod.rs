pub mod upload;

pub use upload::{display_name, validate_upload, UploadCandidate, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct DataConnect;

impl UseCaseMetadata for DataConnect {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "data_connect"
    }

    fn display_name() -> &'static str {
        "Connect Your Data"
    }

    fn description() -> &'static str {
        "Upload of a CSV or Excel sales history to /product/data_connect"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(DataConnect::full_name(), "u501_data_connect");
    }
}
