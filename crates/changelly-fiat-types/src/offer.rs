//! Purchase offer types
//!
//! The offers endpoint returns HTTP 200 even when some providers fail to
//! quote: each element of the response is either a quote or a per-provider
//! error, distinguished only by the presence of the `errorType` field. The
//! [`Offer`] enum resolves that at deserialization time so call sites never
//! probe fields.

use rust_decimal::Decimal;
use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::enums::{ErrorType, PaymentMethod, Provider};
use crate::error::ErrorDetails;

/// Parameters for the offers endpoint
#[derive(Debug, Clone, TypedBuilder)]
pub struct GetOffersParams {
    /// Restrict the response to a single On-Ramp provider
    #[builder(default, setter(strip_option))]
    pub provider_code: Option<Provider>,
    /// User ID provided by you
    #[builder(default, setter(strip_option, into))]
    pub external_user_id: Option<String>,
    /// Ticker of the pay-in currency in uppercase
    #[builder(setter(into))]
    pub currency_from: String,
    /// Ticker of the payout currency in uppercase
    #[builder(setter(into))]
    pub currency_to: String,
    /// Amount of currency the user is going to pay
    pub amount_from: Decimal,
    /// Country ISO 3166-1 code (Alpha-2)
    #[builder(setter(into))]
    pub country: String,
    /// State ISO 3166-2 code, required when country is US
    #[builder(default, setter(strip_option, into))]
    pub state: Option<String>,
    /// User's IP address
    #[builder(default, setter(strip_option, into))]
    pub ip: Option<String>,
}

/// Purchase details for one payment method within a quote
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOffer {
    /// Amount of funds the user is expected to get after the purchase
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_expected_to: Decimal,
    /// Payment method code
    pub method: PaymentMethod,
    /// Payment method name
    pub method_name: String,
    /// Rate of purchase including all fees
    #[serde(with = "rust_decimal::serde::str")]
    pub inverted_rate: Decimal,
    /// Total fee of purchase
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
}

/// A successful quote from one provider
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferQuote {
    /// On-Ramp provider code
    pub provider_code: Provider,
    /// Best purchase rate among all payment methods, fees included
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    /// Inverted rate of purchase
    #[serde(with = "rust_decimal::serde::str")]
    pub inverted_rate: Decimal,
    /// Lowest total fee among all payment methods
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    /// Amount of currency the user is going to pay
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_from: Decimal,
    /// Largest expected payout among all payment methods
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_expected_to: Decimal,
    /// Purchase details per available payment method
    pub payment_method_offers: Vec<PaymentMethodOffer>,
}

/// A per-provider failure inside an otherwise successful offers response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFailure {
    /// On-Ramp provider code
    pub provider_code: Provider,
    /// Error kind
    ///
    /// Offer-level failures only ever carry provider-side kinds (limits,
    /// country, currency, payment method and the like), but the full
    /// [`ErrorType`] is accepted on deserialization so an unanticipated
    /// kind does not reject the whole offers list.
    pub error_type: ErrorType,
    /// Error message
    pub error_message: String,
    /// Error details, `null` when the error carries none
    pub error_details: Option<Vec<ErrorDetails>>,
}

/// One element of the offers response: a quote or a per-provider error
///
/// The `Failed` variant is tried first so that any element carrying an
/// `errorType` field deserializes as a failure; everything else must carry
/// the full quote shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Offer {
    /// Provider failed to produce a quote
    Failed(OfferFailure),
    /// Provider produced a quote
    Quote(OfferQuote),
}

impl Offer {
    /// The provider this element belongs to
    pub fn provider_code(&self) -> Provider {
        match self {
            Self::Failed(failure) => failure.provider_code,
            Self::Quote(quote) => quote.provider_code,
        }
    }

    /// Returns true for a successful quote
    pub fn is_quote(&self) -> bool {
        matches!(self, Self::Quote(_))
    }

    /// The quote, if this provider quoted successfully
    pub fn as_quote(&self) -> Option<&OfferQuote> {
        match self {
            Self::Quote(quote) => Some(quote),
            Self::Failed(_) => None,
        }
    }

    /// The failure, if this provider failed to quote
    pub fn as_failure(&self) -> Option<&OfferFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Quote(_) => None,
        }
    }
}
