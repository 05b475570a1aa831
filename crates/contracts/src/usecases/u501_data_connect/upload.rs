use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::api_error::ApiError;

/// Extensions accepted without a matching MIME type
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".csv", ".xls", ".xlsx"];
pub const CSV_MIME: &str = "text/csv";
/// Names longer than this are shortened for display
pub const MAX_DISPLAY_NAME: usize = 30;

/// Name and MIME type of a file picked or dropped by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime_type: String,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.mime_type == CSV_MIME
            || ACCEPTED_EXTENSIONS
                .iter()
                .any(|ext| self.name.ends_with(ext))
    }
}

/// Rejects files that are neither CSV nor Excel
pub fn validate_upload(candidate: Option<&UploadCandidate>) -> Result<(), ApiError> {
    match candidate {
        None => Err(ApiError::Upload("No file selected".to_string())),
        Some(c) if c.is_accepted() => Ok(()),
        Some(c) => Err(ApiError::Upload(format!(
            "Unsupported file type: {}. Please upload a CSV or Excel file.",
            c.name
        ))),
    }
}

/// File name for the upload card: `first15...last10` when longer than 30 characters
pub fn display_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return "No file selected".to_string();
    };
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > MAX_DISPLAY_NAME {
        let head: String = chars[..15].iter().collect();
        let tail: String = chars[chars.len() - 10..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        name.to_string()
    }
}

/// Reply of `POST /product/data_connect`; the body is only logged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub body: serde_json::Map<String, Value>,
}
