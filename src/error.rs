use thiserror::Error;

/// Everything that can go wrong between the submit button and the rendered
/// result. Only `ConfigError` is fatal; the rest are shown to the user and
/// the form stays usable.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Missing endpoint or credential at startup.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Submission rejected before any network call.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Upstream answered with a non-200 status; body surfaced verbatim.
    #[error("Upstream error: {status} - {body}")]
    UpstreamError { status: u16, body: String },

    /// Connection-level failure talking to the upstream.
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// Response arrived but did not match the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_carries_status_and_body() {
        let err = StudioError::UpstreamError {
            status: 500,
            body: "server error".into(),
        };
        assert_eq!(err.to_string(), "Upstream error: 500 - server error");
    }

    #[test]
    fn test_validation_display() {
        let err = StudioError::ValidationError("no images".into());
        assert_eq!(err.to_string(), "Validation error: no images");
    }
}
