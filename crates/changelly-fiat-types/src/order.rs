//! Order creation types
//!
//! Optional request fields are omitted from the serialized body when unset;
//! the serialized form is embedded verbatim in the request signature, so an
//! explicit `null` and an omitted key are not interchangeable. The response
//! fills unset optionals with explicit `null`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::enums::{PaymentMethod, Provider};

/// Parameters for creating a crypto purchase order
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    /// Order ID provided by you
    #[builder(setter(into))]
    pub external_order_id: String,
    /// User ID provided by you
    #[builder(setter(into))]
    pub external_user_id: String,
    /// On-Ramp provider code
    pub provider_code: Provider,
    /// Ticker of the pay-in currency in uppercase
    #[builder(setter(into))]
    pub currency_from: String,
    /// Ticker of the payout currency in uppercase
    #[builder(setter(into))]
    pub currency_to: String,
    /// Amount of currency the user is going to pay
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_from: Decimal,
    /// Country ISO 3166-1 code (Alpha-2)
    #[builder(setter(into))]
    pub country: String,
    /// State ISO 3166-2 code, required when country is US
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// User's IP address
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Recipient wallet address
    #[builder(setter(into))]
    pub wallet_address: String,
    /// Extra ID for currencies that require one (XRP, XLM, EOS, BNB)
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_extra_id: Option<String>,
    /// Payment method code
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// User agent of the end user
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Free-form metadata echoed back in callbacks
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A created order as returned by the API
///
/// Optional parameters not provided in the request come back as `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// URL to the provider's purchase page
    pub redirect_url: String,
    /// Internal order ID assigned by the Fiat API
    pub order_id: String,
    /// User ID provided by you
    pub external_user_id: String,
    /// Order ID provided by you
    pub external_order_id: String,
    /// On-Ramp provider code
    pub provider_code: Provider,
    /// Ticker of the pay-in currency in uppercase
    pub currency_from: String,
    /// Ticker of the payout currency in uppercase
    pub currency_to: String,
    /// Amount of currency the user is going to pay
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_from: Decimal,
    /// Country ISO 3166-1 code (Alpha-2)
    pub country: String,
    /// State ISO 3166-2 code, present when country is US
    pub state: Option<String>,
    /// User's IP address
    pub ip: Option<String>,
    /// Recipient wallet address
    pub wallet_address: String,
    /// Extra ID for currencies that require one
    pub wallet_extra_id: Option<String>,
    /// Payment method code
    pub payment_method: Option<PaymentMethod>,
    /// User agent of the end user
    pub user_agent: Option<String>,
    /// Metadata from the request, `null` when none was provided
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    /// Creation time (ISO 8601)
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unset_optionals_are_omitted() {
        let params = CreateOrderParams::builder()
            .external_order_id("order-1")
            .external_user_id("user-1")
            .provider_code(Provider::Moonpay)
            .currency_from("USD")
            .currency_to("BTC")
            .amount_from(dec!(100))
            .country("GB")
            .wallet_address("bc1qexample")
            .build();

        let json = serde_json::to_string(&params).unwrap();
        assert!(!json.contains("state"));
        assert!(!json.contains("walletExtraId"));
        assert!(!json.contains("metadata"));
        assert!(json.contains("\"amountFrom\":\"100\""));
    }

    #[test]
    fn test_body_key_order_follows_declaration() {
        let params = CreateOrderParams::builder()
            .external_order_id("order-1")
            .external_user_id("user-1")
            .provider_code(Provider::Banxa)
            .currency_from("EUR")
            .currency_to("ETH")
            .amount_from(dec!(50))
            .country("DE")
            .wallet_address("0xabc")
            .build();

        let json = serde_json::to_string(&params).unwrap();
        let external = json.find("externalOrderId").unwrap();
        let provider = json.find("providerCode").unwrap();
        let wallet = json.find("walletAddress").unwrap();
        assert!(external < provider);
        assert!(provider < wallet);
    }

    #[test]
    fn test_order_response_with_nulls() {
        let json = r#"{
            "redirectUrl": "https://example.com/buy",
            "orderId": "ord-123",
            "externalUserId": "user-1",
            "externalOrderId": "order-1",
            "providerCode": "wert",
            "currencyFrom": "USD",
            "currencyTo": "BTC",
            "amountFrom": "100",
            "country": "GB",
            "state": null,
            "ip": null,
            "walletAddress": "bc1qexample",
            "walletExtraId": null,
            "paymentMethod": null,
            "userAgent": null,
            "metadata": null,
            "createdAt": "2024-01-15T10:30:00.000Z"
        }"#;
        let order: OrderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ord-123");
        assert_eq!(order.provider_code, Provider::Wert);
        assert!(order.state.is_none());
        assert!(order.metadata.is_none());
        assert_eq!(order.amount_from, dec!(100));
    }
}
