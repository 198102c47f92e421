//! REST API client for the Changelly Fiat (on-ramp) API
//!
//! This crate provides a typed client for buying crypto with fiat through
//! Changelly's aggregated On-Ramp providers.
//!
//! # Features
//!
//! - **Catalog**: providers, supported currencies, country availability
//! - **Offers**: purchase quotes across providers, with per-provider failures
//!   surfaced as data rather than errors
//! - **Orders**: order creation and wallet address validation
//! - **Callbacks**: signature verification for inbound order callbacks
//!
//! # Authentication
//!
//! Every request carries `X-Api-Key` and an `X-Api-Signature` computed as an
//! RSA-SHA256 (PKCS#1 v1.5) signature over the canonical request URL
//! concatenated with the JSON body. Signing happens locally before any
//! network I/O; key problems surface as [`AuthError`] without a round trip.
//!
//! # Example
//!
//! ```no_run
//! use changelly_fiat_rest::{ChangellyFiatClient, Credentials};
//! use changelly_fiat_rest::types::{Decimal, GetOffersParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = ChangellyFiatClient::new(creds);
//!
//!     let params = GetOffersParams::builder()
//!         .currency_from("USD")
//!         .currency_to("BTC")
//!         .amount_from(Decimal::from(100))
//!         .country("GB")
//!         .build();
//!
//!     for offer in client.get_offers(&params).await? {
//!         match offer.as_quote() {
//!             Some(quote) => println!("{}: rate {}", quote.provider_code, quote.rate),
//!             None => println!("{}: no quote", offer.provider_code()),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Recognized HTTP statuses (400/401/429/500) map onto [`RestError`]
//! variants carrying the parsed provider error plus request/response
//! snapshots; other statuses become [`RestError::Unexpected`]; transport
//! failures with no response pass through untyped. This client never
//! retries — retry and backoff policy belong to the caller.

pub mod client;
pub mod endpoints;
pub mod error;

// Re-export main types
pub use client::{
    ChangellyFiatClient, ClientConfig, RequestOptions, API_KEY_HEADER, API_SIGNATURE_HEADER,
    DEFAULT_BASE_URL,
};
pub use error::{CallContext, RequestSnapshot, ResponseSnapshot, RestError, RestResult};

// Re-export the signing layer
pub use changelly_fiat_auth::{
    AuthError, AuthResult, Credentials, SignatureRequest, SignedRequest, Signer,
};

// Re-export the data model
pub use changelly_fiat_types as types;
pub use changelly_fiat_types::{
    AddressValidation, CountryAvailability, CreateOrderParams, CurrencyInfo, ErrorPayload,
    ErrorType, GetOffersParams, Offer, OrderInfo, Provider, ProviderInfo,
    ValidateWalletAddressParams,
};
