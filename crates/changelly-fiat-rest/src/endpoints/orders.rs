//! Order creation and wallet address validation endpoints
//!
//! Both are POST requests; the serialized JSON body is embedded verbatim in
//! the request signature and sent byte-for-byte as signed.

use tracing::{debug, instrument};

use crate::client::{Dispatcher, RequestOptions};
use crate::error::RestResult;
use changelly_fiat_types::{
    AddressValidation, CreateOrderParams, OrderInfo, ValidateWalletAddressParams,
};

const ORDERS_PATH: &str = "/v1/orders";
const VALIDATE_ADDRESS_PATH: &str = "/v1/validate-address";

/// Order endpoints
pub struct OrdersEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> OrdersEndpoints<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Create a crypto purchase order and get a redirect URL to the
    /// provider's purchase page
    ///
    /// Optional parameters left unset come back as `null` in the response.
    #[instrument(skip(self, params, opts), fields(
        provider = %params.provider_code,
        external_order_id = %params.external_order_id,
    ))]
    pub async fn create(
        &self,
        params: &CreateOrderParams,
        opts: &RequestOptions,
    ) -> RestResult<OrderInfo> {
        debug!("Creating order");
        self.dispatcher.post(ORDERS_PATH, params, opts).await
    }

    /// Check whether a wallet address and optional extra ID are valid for
    /// the given currency
    #[instrument(skip(self, params, opts), fields(currency = %params.currency))]
    pub async fn validate_address(
        &self,
        params: &ValidateWalletAddressParams,
        opts: &RequestOptions,
    ) -> RestResult<AddressValidation> {
        debug!("Validating wallet address");
        self.dispatcher.post(VALIDATE_ADDRESS_PATH, params, opts).await
    }
}
