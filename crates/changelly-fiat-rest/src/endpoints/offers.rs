//! Purchase offer endpoint
//!
//! Query pairs are emitted in the declared parameter order; the order is
//! baked into the request signature, so it must match the wire exactly.

use tracing::{debug, instrument};

use crate::client::{Dispatcher, RequestOptions};
use crate::error::RestResult;
use changelly_fiat_types::{GetOffersParams, Offer};

const OFFERS_PATH: &str = "/v1/offers";

/// Offer endpoints
pub struct OffersEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> OffersEndpoints<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get purchase offers from On-Ramp providers
    ///
    /// A 200 response can still contain per-provider failures; each element
    /// of the result is either [`Offer::Quote`] or [`Offer::Failed`].
    #[instrument(skip(self, params, opts), fields(
        currency_from = %params.currency_from,
        currency_to = %params.currency_to,
    ))]
    pub async fn get(
        &self,
        params: &GetOffersParams,
        opts: &RequestOptions,
    ) -> RestResult<Vec<Offer>> {
        let mut query = Vec::new();
        if let Some(provider_code) = params.provider_code {
            query.push(("providerCode".to_string(), provider_code.to_string()));
        }
        if let Some(external_user_id) = &params.external_user_id {
            query.push(("externalUserId".to_string(), external_user_id.clone()));
        }
        query.push(("currencyFrom".to_string(), params.currency_from.clone()));
        query.push(("currencyTo".to_string(), params.currency_to.clone()));
        query.push(("amountFrom".to_string(), params.amount_from.to_string()));
        query.push(("country".to_string(), params.country.clone()));
        if let Some(state) = &params.state {
            query.push(("state".to_string(), state.clone()));
        }
        if let Some(ip) = &params.ip {
            query.push(("ip".to_string(), ip.clone()));
        }

        debug!("Fetching offers");
        self.dispatcher.get(OFFERS_PATH, query, opts).await
    }
}
