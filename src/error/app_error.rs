use thiserror::Error;

/// Application-wide error type that represents all possible errors in the relay.
///
/// The first five variants are request validation failures detected before any
/// side effect; the provider variants are dispatch failures surfaced to the
/// caller verbatim. Enrichment lookups never produce an `AppError`; their
/// failures are swallowed inside the suppression stage.
#[derive(Error, Debug)]
pub enum AppError {
    /// Non-POST request hit the relay endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Missing or malformed Authorization header
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Request body is absent or not a JSON object
    #[error("Invalid JSON body: {message}")]
    InvalidBody { message: String },

    /// Request resolved to no localized contents
    #[error("No contents provided")]
    MissingContent,

    /// Request resolved to no addressing mode
    #[error(
        "No recipients specified (recipient_ids/user_ids/include_external_user_ids) or filters present"
    )]
    MissingRecipients,

    /// Push provider credentials are absent from the environment
    #[error("Push provider credentials not configured")]
    ProviderNotConfigured,

    /// Push provider request exceeded the dispatch timeout
    #[error("Push provider request timeout")]
    ProviderTimeout,

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures, including non-timeout
    /// provider transport errors
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display() {
        assert_eq!(AppError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(AppError::MissingContent.to_string(), "No contents provided");
        let unauthorized = AppError::Unauthorized {
            message: "missing Authorization Bearer".to_string(),
        };
        assert_eq!(
            unauthorized.to_string(),
            "Unauthorized: missing Authorization Bearer"
        );
    }

    #[test]
    fn test_internal_from_anyhow() {
        let error: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(error, AppError::Internal { .. }));
    }
}
