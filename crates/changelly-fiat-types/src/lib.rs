//! Shared types for the Changelly Fiat API
//!
//! This crate provides the request and response models used across the
//! Changelly Fiat SDK. It has minimal dependencies and can be used
//! independently.
//!
//! # Key Types
//!
//! - [`Provider`], [`PaymentMethod`], [`CurrencyType`] - API enums
//! - [`ErrorType`], [`ErrorPayload`], [`ErrorDetails`] - provider error shapes
//! - [`Offer`] - per-provider purchase quote, successful or failed
//! - [`CreateOrderParams`], [`OrderInfo`] - order creation
//! - [`ProviderInfo`], [`CurrencyInfo`], [`CountryAvailability`] - catalog data
//!
//! # Decimal Strings
//!
//! Every monetary amount and rate crosses the wire as a decimal string.
//! Fields are typed as [`rust_decimal::Decimal`] and (de)serialized through
//! the string representation, never through a binary float.

pub mod enums;
pub mod error;
pub mod offer;
pub mod order;
pub mod catalog;
pub mod wallet;

// Re-export commonly used types
pub use catalog::*;
pub use enums::*;
pub use error::*;
pub use offer::*;
pub use order::*;
pub use wallet::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
