//! Error types for signing operations

/// Errors that can occur while signing requests or verifying callbacks
///
/// All of these are configuration or input errors surfaced before any
/// network I/O. A merely invalid callback signature is not an error; it
/// verifies to `false`.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The configured private key is not a PKCS#1 PEM RSA private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The configured callback public key is not a PKCS#1 PEM RSA public key
    #[error("Invalid callback public key")]
    InvalidCallbackPublicKey,

    /// Callback verification requested without a configured callback key
    #[error("Callback public key is required")]
    CallbackKeyMissing,

    /// Callback verification requested with an empty order ID
    #[error("Order ID is required")]
    OrderIdMissing,

    /// The request body is not a JSON object
    #[error("Request body must be a JSON object")]
    BodyNotAnObject,

    /// The pathname or base URL did not resolve to a valid URL
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request body failed to serialize
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// RSA signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for signing operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("CHANGELLY_PRIVATE_KEY".to_string());
        assert!(err.to_string().contains("CHANGELLY_PRIVATE_KEY"));
    }
}
