//! Main REST client implementation

use std::time::Duration;

use changelly_fiat_auth::{AuthResult, Credentials, SignatureRequest, Signer};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::endpoints::{CatalogEndpoints, OffersEndpoints, OrdersEndpoints};
use crate::error::{RequestSnapshot, ResponseSnapshot, RestError, RestResult};
use changelly_fiat_types::{
    AddressValidation, CountryAvailability, CountryAvailabilityParams, CreateOrderParams,
    CurrencyInfo, CurrencyListParams, GetOffersParams, Offer, OrderInfo, ProviderInfo,
    ValidateWalletAddressParams,
};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://fiat-api.changelly.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// API key header, carries the public key verbatim
pub const API_KEY_HEADER: &str = "x-api-key";

/// Signature header, computed per request
pub const API_SIGNATURE_HEADER: &str = "x-api-signature";

/// Client configuration
///
/// Immutable once the client is constructed; each client instance carries
/// its own copy, so tests and sandboxes isolate per instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// API host, production by default
    pub base_url: Url,
    /// Request timeout, 12 seconds by default
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with production defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Per-call overrides applied on top of the client configuration
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Base URL override; the signature is computed over the overridden URL
    pub base_url: Option<Url>,
    /// Extra headers, taking precedence over the defaults on collision
    pub headers: HeaderMap,
    /// Timeout override for this call only
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty options (client defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Route this call to a different host
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Add a header; replaces any default header of the same name
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Override the request timeout for this call
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Shared dispatch: sign, send, decode or map onto the error taxonomy
///
/// Every endpoint goes through [`Dispatcher::send`]; all per-call state is
/// allocated freshly, so concurrent calls never interfere.
pub(crate) struct Dispatcher {
    http: Client,
    signer: Signer,
}

impl Dispatcher {
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        pathname: &str,
        query: Vec<(String, String)>,
        opts: &RequestOptions,
    ) -> RestResult<T> {
        self.send(Method::GET, pathname, query, None, opts).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        pathname: &str,
        body: &B,
        opts: &RequestOptions,
    ) -> RestResult<T> {
        let body = serde_json::to_value(body).map_err(changelly_fiat_auth::AuthError::from)?;
        self.send(Method::POST, pathname, Vec::new(), Some(body), opts)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        pathname: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
        opts: &RequestOptions,
    ) -> RestResult<T> {
        // The signature must cover the exact URL and body bytes that go out,
        // including a per-call base URL override.
        let mut sig_request = SignatureRequest::new(pathname).with_query(query.clone());
        if let Some(base_url) = &opts.base_url {
            sig_request = sig_request.with_base_url(base_url.clone());
        }
        if let Some(body) = body.clone() {
            sig_request = sig_request.with_body(body);
        }
        let signed = self.signer.sign(&sig_request)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(self.signer.credentials().public_key())
                .map_err(|e| RestError::Auth(changelly_fiat_auth::AuthError::Signing(e.to_string())))?,
        );
        headers.insert(
            API_SIGNATURE_HEADER,
            HeaderValue::from_str(&signed.signature)
                .map_err(|e| RestError::Auth(changelly_fiat_auth::AuthError::Signing(e.to_string())))?,
        );
        // Caller headers win on collision
        for (name, value) in &opts.headers {
            headers.insert(name.clone(), value.clone());
        }

        let base_url = opts
            .base_url
            .as_ref()
            .unwrap_or_else(|| self.signer.base_url());
        let request = RequestSnapshot {
            url: signed.url.to_string(),
            method: method.to_string(),
            base_url: base_url.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| {
                    (
                        name.to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect(),
            query,
            body,
        };

        let mut builder = self
            .http
            .request(method, signed.url.clone())
            .headers(headers);
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &signed.body {
            builder = builder.body(body.clone());
        }

        debug!(url = %signed.url, "dispatching request");

        // Transport failures with no response propagate as RestError::Http
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| RestError::Decode {
                message: e.to_string(),
                context: Box::new(crate::error::CallContext {
                    request,
                    response: ResponseSnapshot::new(status, &bytes),
                }),
            })
        } else {
            Err(RestError::from_response(
                status,
                request,
                ResponseSnapshot::new(status, &bytes),
            ))
        }
    }
}

/// Changelly Fiat API client
///
/// Holds only immutable configuration; each method performs one signed HTTP
/// round trip and is independently safe to call from concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use changelly_fiat_rest::{ChangellyFiatClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = ChangellyFiatClient::new(creds);
///
///     let providers = client.get_provider_list().await?;
///     for provider in providers {
///         println!("{}: {}", provider.code, provider.name);
///     }
///
///     Ok(())
/// }
/// ```
pub struct ChangellyFiatClient {
    dispatcher: Dispatcher,
}

impl ChangellyFiatClient {
    /// Create a client against the production host with default settings
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(
                config
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("changelly-fiat-rest/", env!("CARGO_PKG_VERSION"))),
            )
            .build()
            .expect("Failed to create HTTP client");

        let signer = Signer::new(config.credentials, config.base_url);

        Self {
            dispatcher: Dispatcher { http, signer },
        }
    }

    /// The signer backing this client
    pub fn signer(&self) -> &Signer {
        &self.dispatcher.signer
    }

    /// Verify the `X-Callback-Signature` of an inbound order callback
    ///
    /// Requires the callback public key on the credentials. Returns
    /// `Ok(false)` for an invalid signature; errors only on configuration
    /// problems.
    pub fn verify_order_callback(&self, signature: &str, order_id: &str) -> AuthResult<bool> {
        self.signer().verify_order_callback(signature, order_id)
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Provider, currency, and country catalog endpoints
    pub fn catalog(&self) -> CatalogEndpoints<'_> {
        CatalogEndpoints::new(&self.dispatcher)
    }

    /// Purchase offer endpoints
    pub fn offers(&self) -> OffersEndpoints<'_> {
        OffersEndpoints::new(&self.dispatcher)
    }

    /// Order creation and wallet validation endpoints
    pub fn orders(&self) -> OrdersEndpoints<'_> {
        OrdersEndpoints::new(&self.dispatcher)
    }

    // ========================================================================
    // Convenience methods (default request options)
    // ========================================================================

    /// Get extended information about On-Ramp providers
    pub async fn get_provider_list(&self) -> RestResult<Vec<ProviderInfo>> {
        self.catalog()
            .provider_list(&RequestOptions::default())
            .await
    }

    /// Get the list of supported cryptos and fiat currencies
    pub async fn get_currency_list(
        &self,
        params: &CurrencyListParams,
    ) -> RestResult<Vec<CurrencyInfo>> {
        self.catalog()
            .currency_list(params, &RequestOptions::default())
            .await
    }

    /// Get the list of countries where crypto purchases are supported
    pub async fn get_country_availability(
        &self,
        params: &CountryAvailabilityParams,
    ) -> RestResult<Vec<CountryAvailability>> {
        self.catalog()
            .country_availability(params, &RequestOptions::default())
            .await
    }

    /// Get purchase offers from On-Ramp providers
    ///
    /// Individual providers can fail inside a 200 response; inspect each
    /// [`Offer`] element for the quote/failure split.
    pub async fn get_offers(&self, params: &GetOffersParams) -> RestResult<Vec<Offer>> {
        self.offers().get(params, &RequestOptions::default()).await
    }

    /// Create a crypto purchase order and get a redirect URL
    pub async fn create_order(&self, params: &CreateOrderParams) -> RestResult<OrderInfo> {
        self.orders()
            .create(params, &RequestOptions::default())
            .await
    }

    /// Check a wallet address (and optional extra ID) for a currency
    pub async fn validate_wallet_address(
        &self,
        params: &ValidateWalletAddressParams,
    ) -> RestResult<AddressValidation> {
        self.orders()
            .validate_address(params, &RequestOptions::default())
            .await
    }
}

impl std::fmt::Debug for ChangellyFiatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangellyFiatClient")
            .field("base_url", self.signer().base_url())
            .finish()
    }
}
