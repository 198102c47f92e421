//! Request signing and callback verification for the Changelly Fiat API
//!
//! Every request to the Fiat API carries an `X-Api-Signature` header: an
//! RSA-SHA256 (PKCS#1 v1.5) signature over the canonical request URL
//! concatenated with the JSON request body. This crate builds that signature
//! and verifies the `X-Callback-Signature` on inbound order callbacks.
//!
//! # Example
//!
//! ```no_run
//! use changelly_fiat_auth::{Credentials, SignatureRequest, Signer};
//! use url::Url;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let base = Url::parse("https://fiat-api.changelly.com")?;
//!     let signer = Signer::new(creds, base);
//!
//!     let request = SignatureRequest::new("/v1/providers");
//!     let signed = signer.sign(&request)?;
//!     println!("X-Api-Signature: {}", signed.signature);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Canonical payload
//!
//! The signed payload is the absolute URL (query string included, pairs in
//! the order they were supplied) immediately followed by the JSON body, with
//! no separator; `{}` stands in for an absent body. The server re-derives the
//! same bytes from the wire request, so query-pair order and JSON key order
//! must match what is actually sent.

mod credentials;
mod error;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::{SignatureRequest, SignedRequest, Signer};
