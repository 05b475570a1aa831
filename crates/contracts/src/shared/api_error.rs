use thiserror::Error;

/// Failure of a call to the dashboard API, as seen by the views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Request failed: {0}")]
    Network(String),

    /// 404: the backend has no data for this view yet
    #[error("No data available yet")]
    NotFound,

    #[error("Server error (HTTP {status})")]
    Server { status: u16 },

    #[error("Unexpected response (HTTP {status})")]
    Http { status: u16 },

    /// The body did not match the expected schema
    #[error("Invalid response: {0}")]
    Validation(String),

    /// A file rejected before upload
    #[error("{0}")]
    Upload(String),
}

impl ApiError {
    /// Error for a non-2xx status, `None` for success statuses
    pub fn from_status(status: u16) -> Option<ApiError> {
        match status {
            200..=299 => None,
            404 => Some(ApiError::NotFound),
            500..=599 => Some(ApiError::Server { status }),
            _ => Some(ApiError::Http { status }),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Server { status } | ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Views show the onboarding state instead of an error
    pub fn is_no_data(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// Views offer a retry
    pub fn is_retryable_server(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(204), None);
        assert_eq!(ApiError::from_status(404), Some(ApiError::NotFound));
        assert_eq!(
            ApiError::from_status(503),
            Some(ApiError::Server { status: 503 })
        );
        assert_eq!(
            ApiError::from_status(400),
            Some(ApiError::Http { status: 400 })
        );
        assert_eq!(
            ApiError::from_status(302),
            Some(ApiError::Http { status: 302 })
        );
    }

    #[test]
    fn test_view_classification() {
        assert!(ApiError::NotFound.is_no_data());
        assert!(!ApiError::NotFound.is_retryable_server());
        assert!(ApiError::Server { status: 500 }.is_retryable_server());
        assert!(!ApiError::Http { status: 422 }.is_retryable_server());
        assert!(!ApiError::Network("offline".into()).is_no_data());
        assert_eq!(ApiError::Server { status: 502 }.status(), Some(502));
        assert_eq!(ApiError::Upload("bad".into()).status(), None);
    }

    #[test]
    fn test_validation_from_serde() {
        let err: ApiError = serde_json::from_str::<Vec<u32>>("{}").unwrap_err().into();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().starts_with("Invalid response"));
    }
}
