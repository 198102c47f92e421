//! Error types for REST API operations
//!
//! HTTP statuses map one-to-one onto typed variants (400, 401, 429, 500);
//! every other non-2xx status becomes [`RestError::Unexpected`]. Each remote
//! variant carries snapshots of the request that was sent and the response
//! that came back. Transport failures without an HTTP response pass through
//! as [`RestError::Http`] untouched. This layer never retries; retry policy
//! belongs to the caller.

use changelly_fiat_auth::AuthError;
use changelly_fiat_types::ErrorPayload;
use reqwest::StatusCode;

/// Snapshot of an outgoing request, kept for error inspection
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    /// Fully resolved URL, query string included
    pub url: String,
    /// HTTP method
    pub method: String,
    /// Base URL the request was resolved against
    pub base_url: String,
    /// Headers as sent, caller overrides applied
    pub headers: Vec<(String, String)>,
    /// Query pairs in wire order
    pub query: Vec<(String, String)>,
    /// JSON body, when the request had one
    pub body: Option<serde_json::Value>,
}

/// Snapshot of the response that triggered an error
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    /// HTTP status code
    pub status: u16,
    /// Canonical status text (e.g. "Bad Request")
    pub status_text: String,
    /// Response body, parsed as JSON when possible, else the raw text
    pub body: serde_json::Value,
}

impl ResponseSnapshot {
    pub(crate) fn new(status: StatusCode, bytes: &[u8]) -> Self {
        let body = serde_json::from_slice(bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()));
        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body,
        }
    }
}

/// Request and response snapshots attached to a remote error
#[derive(Debug, Clone)]
pub struct CallContext {
    /// The request as it went out
    pub request: RequestSnapshot,
    /// The response as it came back
    pub response: ResponseSnapshot,
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport failure with no HTTP response (network error, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error surfaced before any network I/O
    #[error("Signing error: {0}")]
    Auth(#[from] AuthError),

    /// The request failed validation or the provider rejected it (HTTP 400)
    #[error("Bad request: {}", .payload.error_message)]
    BadRequest {
        /// Parsed error body; errorType is one of the request-level kinds
        payload: ErrorPayload,
        /// Request/response snapshots
        context: Box<CallContext>,
    },

    /// Invalid or missing API credentials (HTTP 401)
    #[error("Unauthorized: {}", .payload.error_message)]
    Unauthorized {
        /// Parsed error body; errorDetails is always null
        payload: ErrorPayload,
        /// Request/response snapshots
        context: Box<CallContext>,
    },

    /// Rate limit exceeded (HTTP 429)
    #[error("Too many requests: {}", .payload.error_message)]
    TooManyRequests {
        /// Parsed error body; errorDetails is always null
        payload: ErrorPayload,
        /// Request/response snapshots
        context: Box<CallContext>,
    },

    /// The API failed internally (HTTP 500)
    #[error("Internal server error: {}", .payload.error_message)]
    InternalServerError {
        /// Parsed error body; errorDetails is always null
        payload: ErrorPayload,
        /// Request/response snapshots
        context: Box<CallContext>,
    },

    /// Any other HTTP status, or a recognized status whose body did not
    /// parse as an error payload
    #[error("Unexpected response status {}", .context.response.status)]
    Unexpected {
        /// Request/response snapshots
        context: Box<CallContext>,
    },

    /// A 2xx response body failed to deserialize as the declared type
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Deserialization error text
        message: String,
        /// Request/response snapshots
        context: Box<CallContext>,
    },
}

impl RestError {
    /// Map a non-2xx response onto the typed taxonomy
    pub(crate) fn from_response(
        status: StatusCode,
        request: RequestSnapshot,
        response: ResponseSnapshot,
    ) -> Self {
        let payload: Option<ErrorPayload> = serde_json::from_value(response.body.clone()).ok();
        let context = Box::new(CallContext { request, response });

        match (status.as_u16(), payload) {
            (400, Some(payload)) => Self::BadRequest { payload, context },
            (401, Some(payload)) => Self::Unauthorized { payload, context },
            (429, Some(payload)) => Self::TooManyRequests { payload, context },
            (500, Some(payload)) => Self::InternalServerError { payload, context },
            _ => Self::Unexpected { context },
        }
    }

    /// The parsed provider error body, for the four typed statuses
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::BadRequest { payload, .. }
            | Self::Unauthorized { payload, .. }
            | Self::TooManyRequests { payload, .. }
            | Self::InternalServerError { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// The request/response snapshots, when the error came from a response
    pub fn context(&self) -> Option<&CallContext> {
        match self {
            Self::BadRequest { context, .. }
            | Self::Unauthorized { context, .. }
            | Self::TooManyRequests { context, .. }
            | Self::InternalServerError { context, .. }
            | Self::Unexpected { context }
            | Self::Decode { context, .. } => Some(context),
            Self::Http(_) | Self::Auth(_) => None,
        }
    }

    /// The HTTP status of the failing response, when one was received
    pub fn status(&self) -> Option<u16> {
        self.context().map(|ctx| ctx.response.status)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use changelly_fiat_types::ErrorType;

    fn request_snapshot() -> RequestSnapshot {
        RequestSnapshot {
            url: "https://fiat-api.changelly.com/v1/offers".to_string(),
            method: "GET".to_string(),
            base_url: "https://fiat-api.changelly.com".to_string(),
            headers: vec![],
            query: vec![],
            body: None,
        }
    }

    #[test]
    fn test_bad_request_mapping() {
        let body =
            br#"{"errorType":"validation","errorMessage":"Invalid request","errorDetails":null}"#;
        let response = ResponseSnapshot::new(StatusCode::BAD_REQUEST, body);
        let err = RestError::from_response(StatusCode::BAD_REQUEST, request_snapshot(), response);

        let payload = err.payload().expect("payload");
        assert_eq!(payload.error_type, ErrorType::Validation);
        assert_eq!(err.status(), Some(400));
        assert!(matches!(err, RestError::BadRequest { .. }));
    }

    #[test]
    fn test_unknown_status_maps_to_unexpected() {
        let response = ResponseSnapshot::new(StatusCode::BAD_GATEWAY, b"upstream down");
        let err = RestError::from_response(StatusCode::BAD_GATEWAY, request_snapshot(), response);
        assert!(matches!(err, RestError::Unexpected { .. }));
        assert_eq!(err.status(), Some(502));
        assert!(err.payload().is_none());
    }

    #[test]
    fn test_unparseable_400_body_falls_back_to_unexpected() {
        let response = ResponseSnapshot::new(StatusCode::BAD_REQUEST, b"<html>nope</html>");
        let err = RestError::from_response(StatusCode::BAD_REQUEST, request_snapshot(), response);
        assert!(matches!(err, RestError::Unexpected { .. }));
    }

    #[test]
    fn test_non_json_body_is_preserved_as_text() {
        let response = ResponseSnapshot::new(StatusCode::BAD_GATEWAY, b"upstream down");
        assert_eq!(
            response.body,
            serde_json::Value::String("upstream down".to_string())
        );
    }
}
