//! Request signer and callback verifier
//!
//! Signature algorithm, as the server verifies it:
//! 1. Resolve the absolute URL from (base override, else default base) and
//!    the pathname; append query pairs in the order supplied using form
//!    URL-encoding.
//! 2. Serialize the JSON body; an absent body serializes as `{}`.
//! 3. Payload = URL string directly followed by the body string.
//! 4. RSA PKCS#1 v1.5 sign over SHA-256, base64-encode.
//!
//! The concatenation must match the wire request bit for bit, so query-pair
//! order and JSON key order are significant.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer as _, Verifier as _};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::trace;
use url::Url;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// One request target to be signed
///
/// Built per call and discarded; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SignatureRequest {
    /// Request path (e.g. `/v1/offers`)
    pub pathname: String,
    /// Per-request base URL override
    pub base_url: Option<Url>,
    /// Query pairs in the exact order they will appear on the wire
    pub query: Vec<(String, String)>,
    /// JSON request body; must be an object when present
    pub body: Option<serde_json::Value>,
}

impl SignatureRequest {
    /// Create a request for the given pathname
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            base_url: None,
            query: Vec::new(),
            body: None,
        }
    }

    /// Override the base URL for this request only
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the query pairs (order is preserved and significant)
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Set the JSON request body
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A signed, ready-to-send request descriptor
///
/// `url` and `body` are exactly what was signed; send them unmodified or the
/// server will reject the signature.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Fully resolved request URL, query string included
    pub url: Url,
    /// Serialized JSON body, when the request has one
    pub body: Option<String>,
    /// Base64-encoded RSA-SHA256 signature for `X-Api-Signature`
    pub signature: String,
}

/// Builds `X-Api-Signature` values and verifies `X-Callback-Signature`
///
/// Holds only immutable configuration; safe to share across concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
    base_url: Url,
}

impl Signer {
    /// Create a signer with the given credentials and default base URL
    pub fn new(credentials: Credentials, base_url: Url) -> Self {
        Self {
            credentials,
            base_url,
        }
    }

    /// The credentials this signer signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The default base URL used when a request carries no override
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sign a request, returning the resolved URL, the exact body string
    /// that was signed, and the signature
    pub fn sign(&self, request: &SignatureRequest) -> AuthResult<SignedRequest> {
        if let Some(body) = &request.body {
            if !body.is_object() {
                return Err(AuthError::BodyNotAnObject);
            }
        }

        let url = self.resolve_url(request)?;
        let body_json = match &request.body {
            Some(body) => serde_json::to_string(body)?,
            None => "{}".to_string(),
        };

        let payload = format!("{}{}", url, body_json);
        trace!(pathname = %request.pathname, "building request signature");
        let signature = self.sign_payload(payload.as_bytes())?;

        Ok(SignedRequest {
            url,
            body: request.body.as_ref().map(|_| body_json),
            signature,
        })
    }

    /// Build the `X-Api-Signature` value for a request
    pub fn build_signature(&self, request: &SignatureRequest) -> AuthResult<String> {
        Ok(self.sign(request)?.signature)
    }

    /// Verify the `X-Callback-Signature` of an order callback
    ///
    /// The signed payload is the JSON serialization of `{"orderId": …}`,
    /// not the full callback body. Returns `Ok(false)` for an invalid
    /// signature; errors only on configuration problems.
    pub fn verify_order_callback(&self, signature: &str, order_id: &str) -> AuthResult<bool> {
        if order_id.is_empty() {
            return Err(AuthError::OrderIdMissing);
        }

        let payload = serde_json::to_string(&serde_json::json!({ "orderId": order_id }))?;
        self.verify_callback(signature, payload.as_bytes())
    }

    /// Verify a base64 callback signature against a raw payload
    fn verify_callback(&self, signature: &str, payload: &[u8]) -> AuthResult<bool> {
        let pem = self
            .credentials
            .callback_public_key()
            .ok_or(AuthError::CallbackKeyMissing)?;
        let public_key =
            RsaPublicKey::from_pkcs1_pem(pem).map_err(|_| AuthError::InvalidCallbackPublicKey)?;
        let verifying_key = VerifyingKey::<Sha256>::new(public_key);

        let Ok(raw) = BASE64.decode(signature) else {
            return Ok(false);
        };
        let Ok(parsed) = Signature::try_from(raw.as_slice()) else {
            return Ok(false);
        };

        Ok(verifying_key.verify(payload, &parsed).is_ok())
    }

    fn resolve_url(&self, request: &SignatureRequest) -> AuthResult<Url> {
        let base = request.base_url.as_ref().unwrap_or(&self.base_url);
        let mut url = base.join(&request.pathname)?;

        if !request.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }

    fn sign_payload(&self, payload: &[u8]) -> AuthResult<String> {
        let private_key = RsaPrivateKey::from_pkcs1_pem(self.credentials.private_key_pem())
            .map_err(|_| AuthError::InvalidPrivateKey)?;
        let signing_key = SigningKey::<Sha256>::new(private_key);

        let signature = signing_key
            .try_sign(payload)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(BASE64.encode(signature.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};

    const TEST_BASE: &str = "https://fiat-api.changelly.com";

    struct TestKeys {
        private_pem: String,
        public_pem: String,
    }

    fn generate_keys() -> TestKeys {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("key generation");
        let public_key = private_key.to_public_key();
        TestKeys {
            private_pem: private_key
                .to_pkcs1_pem(LineEnding::LF)
                .expect("private pem")
                .to_string(),
            public_pem: public_key.to_pkcs1_pem(LineEnding::LF).expect("public pem"),
        }
    }

    fn signer_with(keys: &TestKeys) -> Signer {
        let creds = Credentials::new("pk_test", keys.private_pem.clone())
            .with_callback_public_key(keys.public_pem.clone());
        Signer::new(creds, Url::parse(TEST_BASE).unwrap())
    }

    fn verify_payload(keys: &TestKeys, payload: &[u8], signature_b64: &str) -> bool {
        let public_key = RsaPublicKey::from_pkcs1_pem(&keys.public_pem).unwrap();
        let verifying_key = VerifyingKey::<Sha256>::new(public_key);
        let raw = BASE64.decode(signature_b64).unwrap();
        let parsed = Signature::try_from(raw.as_slice()).unwrap();
        verifying_key.verify(payload, &parsed).is_ok()
    }

    #[test]
    fn test_signature_is_deterministic() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        let request = SignatureRequest::new("/v1/offers").with_query(vec![
            ("currencyFrom".to_string(), "USD".to_string()),
            ("currencyTo".to_string(), "BTC".to_string()),
        ]);

        let first = signer.build_signature(&request).unwrap();
        let second = signer.build_signature(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_covers_url_and_empty_body() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        let request = SignatureRequest::new("/v1/providers");

        let signed = signer.sign(&request).unwrap();
        assert_eq!(signed.url.as_str(), format!("{}/v1/providers", TEST_BASE));
        assert!(signed.body.is_none());

        let payload = format!("{}{}", signed.url, "{}");
        assert!(verify_payload(&keys, payload.as_bytes(), &signed.signature));
    }

    #[test]
    fn test_query_order_changes_signature() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        let ab = SignatureRequest::new("/v1/currencies").with_query(vec![
            ("type".to_string(), "crypto".to_string()),
            ("providerCode".to_string(), "moonpay".to_string()),
        ]);
        let ba = SignatureRequest::new("/v1/currencies").with_query(vec![
            ("providerCode".to_string(), "moonpay".to_string()),
            ("type".to_string(), "crypto".to_string()),
        ]);

        let sig_ab = signer.build_signature(&ab).unwrap();
        let sig_ba = signer.build_signature(&ba).unwrap();
        assert_ne!(sig_ab, sig_ba);
    }

    #[test]
    fn test_base_url_override_changes_signature() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        let default_base = SignatureRequest::new("/v1/providers");
        let overridden = SignatureRequest::new("/v1/providers")
            .with_base_url(Url::parse("https://sandbox.example.com").unwrap());

        let signed = signer.sign(&overridden).unwrap();
        assert_eq!(signed.url.host_str(), Some("sandbox.example.com"));
        assert_ne!(
            signed.signature,
            signer.build_signature(&default_base).unwrap()
        );
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        let request =
            SignatureRequest::new("/v1/orders").with_body(serde_json::json!("not an object"));
        assert!(matches!(
            signer.sign(&request),
            Err(AuthError::BodyNotAnObject)
        ));

        let request = SignatureRequest::new("/v1/orders").with_body(serde_json::json!(42));
        assert!(matches!(
            signer.sign(&request),
            Err(AuthError::BodyNotAnObject)
        ));
    }

    #[test]
    fn test_invalid_private_key_is_rejected() {
        let creds = Credentials::new("pk_test", "not a pem");
        let signer = Signer::new(creds, Url::parse(TEST_BASE).unwrap());
        let result = signer.build_signature(&SignatureRequest::new("/v1/providers"));
        assert!(matches!(result, Err(AuthError::InvalidPrivateKey)));
    }

    #[test]
    fn test_signed_body_matches_signature_payload() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        let body = serde_json::json!({
            "currency": "BTC",
            "walletAddress": "bc1qexample"
        });
        let request = SignatureRequest::new("/v1/validate-address").with_body(body);

        let signed = signer.sign(&request).unwrap();
        let body_json = signed.body.clone().unwrap();
        let payload = format!("{}{}", signed.url, body_json);
        assert!(verify_payload(&keys, payload.as_bytes(), &signed.signature));
    }

    #[test]
    fn test_verify_order_callback_accepts_genuine_signature() {
        let keys = generate_keys();
        let signer = signer_with(&keys);

        // Sign {"orderId":"ord-123"} with the same key pair the callback
        // verifier is configured with.
        let private_key = RsaPrivateKey::from_pkcs1_pem(&keys.private_pem).unwrap();
        let signing_key = SigningKey::<Sha256>::new(private_key);
        let payload = r#"{"orderId":"ord-123"}"#;
        let signature = BASE64.encode(signing_key.try_sign(payload.as_bytes()).unwrap().to_bytes());

        assert!(signer.verify_order_callback(&signature, "ord-123").unwrap());
        assert!(!signer.verify_order_callback(&signature, "ord-999").unwrap());
    }

    #[test]
    fn test_verify_order_callback_rejects_garbage() {
        let keys = generate_keys();
        let signer = signer_with(&keys);
        assert!(!signer.verify_order_callback("!!!not base64!!!", "ord-123").unwrap());
        assert!(!signer
            .verify_order_callback(&BASE64.encode(b"short"), "ord-123")
            .unwrap());
    }

    #[test]
    fn test_verify_order_callback_configuration_errors() {
        let keys = generate_keys();
        let creds = Credentials::new("pk_test", keys.private_pem.clone());
        let signer = Signer::new(creds, Url::parse(TEST_BASE).unwrap());
        assert!(matches!(
            signer.verify_order_callback("sig", "ord-123"),
            Err(AuthError::CallbackKeyMissing)
        ));

        let signer = signer_with(&keys);
        assert!(matches!(
            signer.verify_order_callback("sig", ""),
            Err(AuthError::OrderIdMissing)
        ));
    }
}
