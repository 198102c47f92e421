//! Provider, currency, and country catalog types

use serde::Deserialize;

use crate::enums::{CurrencyType, Provider};

/// Extended information about one On-Ramp provider
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    /// On-Ramp provider code
    pub code: Provider,
    /// Provider's name
    pub name: String,
    /// Provider's rating on Trustpilot
    pub trust_pilot_rating: String,
    /// URL of the provider's icon
    pub icon_url: String,
}

/// Filter for the currency list endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyListParams {
    /// Restrict the response to one currency type
    pub currency_type: Option<CurrencyType>,
    /// Restrict the response to one provider's currencies
    pub provider_code: Option<Provider>,
}

/// One supported currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// Currency ticker in uppercase, unique identifier of the currency
    pub ticker: String,
    /// Display name
    pub name: String,
    /// Currency type
    #[serde(rename = "type")]
    pub currency_type: CurrencyType,
    /// Extra ID name (e.g. "Memo") for currencies that require one, else `null`
    pub extra_id_name: Option<String>,
    /// URL of the currency icon
    pub icon_url: String,
    /// Currency precision; always "2" for fiat currencies
    pub precision: String,
}

impl CurrencyInfo {
    /// Returns true if orders for this currency need a wallet extra ID
    pub fn requires_extra_id(&self) -> bool {
        self.extra_id_name.is_some()
    }
}

/// Filter for the country availability endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryAvailabilityParams {
    /// Restrict the response to one provider's countries
    pub provider_code: Option<Provider>,
}

/// A US state where purchases are supported
#[derive(Debug, Clone, Deserialize)]
pub struct StateInfo {
    /// State ISO 3166-2 code
    pub code: String,
    /// State name
    pub name: String,
}

/// A country where crypto purchases are supported
#[derive(Debug, Clone, Deserialize)]
pub struct CountryAvailability {
    /// Country ISO 3166-1 code (Alpha-2)
    pub code: String,
    /// Country name
    pub name: String,
    /// Supported US states, returned when the country is US
    pub states: Option<Vec<StateInfo>>,
}
