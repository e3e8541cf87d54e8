use thiserror::Error;

/// Top-level error type for the api-response crate.
#[derive(Debug, Error)]
pub enum ApiResponseError {
    #[error("invalid usage: {0}")]
    InvalidUsage(&'static str),
    #[error("payload is absent")]
    NullPayload,
    #[error("canonical re-encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ApiResponseResult<T> = Result<T, ApiResponseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_usage_display_expected_call_order_message() {
        let error = ApiResponseError::InvalidUsage("check first");
        assert_eq!(error.to_string(), "invalid usage: check first");
    }

    #[test]
    fn serialization_error_expected_wrapped_serde_detail() {
        let serde_error = serde_json::from_str::<u32>("not-a-number")
            .expect_err("decode of garbage should fail");
        let error = ApiResponseError::from(serde_error);
        assert!(matches!(error, ApiResponseError::Serialization(_)));
        assert!(error.to_string().starts_with("canonical re-encoding failed:"));
    }
}
