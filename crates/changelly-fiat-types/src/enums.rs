//! Provider, PaymentMethod, CurrencyType, and ErrorType enums

use serde::{Deserialize, Serialize};

/// On-Ramp provider codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Provider {
    /// MoonPay
    Moonpay,
    /// Banxa
    Banxa,
    /// Wert
    Wert,
}

impl Provider {
    /// Returns the provider code as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moonpay => "moonpay",
            Self::Banxa => "banxa",
            Self::Wert => "wert",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment method codes
///
/// Methods other than card are rolled out by providers over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PaymentMethod {
    /// Bank card
    Card,
}

impl PaymentMethod {
    /// Returns the payment method code as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency kind filter for the currency list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    /// Cryptocurrency
    Crypto,
    /// Fiat currency
    Fiat,
}

impl CurrencyType {
    /// Returns the currency type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crypto => "crypto",
            Self::Fiat => "fiat",
        }
    }
}

impl std::fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error kinds returned by the API and by individual providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorType {
    /// A request parameter failed validation
    Validation,
    /// Request to the provider was not completed in the allotted time
    Timeout,
    /// Request failed at the provider's end
    Unavailable,
    /// Pay-in amount is outside the provider's limits for the fiat currency
    Limits,
    /// Country is not supported by the provider
    Country,
    /// Offer requested for the United States without a state parameter
    State,
    /// Currency pair is not supported by the provider
    Currency,
    /// Payment method is not supported by the provider
    PaymentMethod,
    /// Provider returned an invalid offer
    InvalidOffer,
    /// Invalid or missing API credentials
    Unauthorized,
    /// Rate limit exceeded
    TooManyRequests,
    /// Internal server error
    InternalServerError,
}

impl ErrorType {
    /// Returns the error type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Timeout => "timeout",
            Self::Unavailable => "unavailable",
            Self::Limits => "limits",
            Self::Country => "country",
            Self::State => "state",
            Self::Currency => "currency",
            Self::PaymentMethod => "paymentMethod",
            Self::InvalidOffer => "invalidOffer",
            Self::Unauthorized => "unauthorized",
            Self::TooManyRequests => "tooManyRequests",
            Self::InternalServerError => "internalServerError",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
