//! Provider error payload shapes

use serde::{Deserialize, Serialize};

use crate::enums::ErrorType;

/// A single (cause, value) pair attached to an error
///
/// For validation errors the cause names the offending request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error cause
    pub cause: String,
    /// Error value
    pub value: String,
}

/// Error body returned by the API on failed requests
///
/// The same shape appears nested inside a failed [`Offer`](crate::Offer).
/// `errorDetails` is an explicit `null` when the error carries no details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Error kind
    ///
    /// Each HTTP status maps to a subset of kinds (a 400 never carries
    /// `unauthorized`, for example), but the payload accepts the full
    /// [`ErrorType`] rather than encoding per-status subsets.
    pub error_type: ErrorType,
    /// Human-readable error message
    pub error_message: String,
    /// Optional (cause, value) detail pairs
    pub error_details: Option<Vec<ErrorDetails>>,
}
