//! Provider, currency, and country catalog endpoints
//!
//! Read-only reference data; all three are GET requests with optional
//! filters.

use tracing::{debug, instrument};

use crate::client::{Dispatcher, RequestOptions};
use crate::error::RestResult;
use changelly_fiat_types::{
    CountryAvailability, CountryAvailabilityParams, CurrencyInfo, CurrencyListParams, ProviderInfo,
};

const PROVIDERS_PATH: &str = "/v1/providers";
const CURRENCIES_PATH: &str = "/v1/currencies";
const COUNTRIES_PATH: &str = "/v1/available-countries";

/// Catalog endpoints
pub struct CatalogEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> CatalogEndpoints<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get extended information about On-Ramp providers
    #[instrument(skip(self, opts))]
    pub async fn provider_list(&self, opts: &RequestOptions) -> RestResult<Vec<ProviderInfo>> {
        debug!("Fetching provider list");
        self.dispatcher.get(PROVIDERS_PATH, Vec::new(), opts).await
    }

    /// Get the list of supported cryptos and fiat currencies
    ///
    /// Without a type filter both fiat currencies and cryptocurrencies are
    /// returned; without a provider filter, the union over all providers.
    #[instrument(skip(self, opts))]
    pub async fn currency_list(
        &self,
        params: &CurrencyListParams,
        opts: &RequestOptions,
    ) -> RestResult<Vec<CurrencyInfo>> {
        let mut query = Vec::new();
        if let Some(currency_type) = params.currency_type {
            query.push(("type".to_string(), currency_type.to_string()));
        }
        if let Some(provider_code) = params.provider_code {
            query.push(("providerCode".to_string(), provider_code.to_string()));
        }

        debug!("Fetching currency list");
        self.dispatcher.get(CURRENCIES_PATH, query, opts).await
    }

    /// Get the list of countries where crypto purchases are supported
    #[instrument(skip(self, opts))]
    pub async fn country_availability(
        &self,
        params: &CountryAvailabilityParams,
        opts: &RequestOptions,
    ) -> RestResult<Vec<CountryAvailability>> {
        let mut query = Vec::new();
        if let Some(provider_code) = params.provider_code {
            query.push(("providerCode".to_string(), provider_code.to_string()));
        }

        debug!("Fetching country availability");
        self.dispatcher.get(COUNTRIES_PATH, query, opts).await
    }
}
