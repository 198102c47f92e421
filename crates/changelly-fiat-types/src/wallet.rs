//! Wallet address validation types

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Parameters for wallet address validation
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ValidateWalletAddressParams {
    /// Cryptocurrency ticker in uppercase
    #[builder(setter(into))]
    pub currency: String,
    /// Recipient wallet address
    #[builder(setter(into))]
    pub wallet_address: String,
    /// Extra ID for currencies that require one (XRP, XLM, EOS, BNB)
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_extra_id: Option<String>,
}

/// Which part of the wallet destination failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressIssue {
    /// The wallet address is incorrect
    WalletAddress,
    /// The extra ID is incorrect
    WalletExtraId,
}

/// Result of wallet address validation
#[derive(Debug, Clone, Deserialize)]
pub struct AddressValidation {
    /// False if the wallet address or extra ID is incorrect
    pub result: bool,
    /// What failed; `null` when the destination is valid
    pub cause: Option<AddressIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_response() {
        let json = r#"{"result": true, "cause": null}"#;
        let validation: AddressValidation = serde_json::from_str(json).unwrap();
        assert!(validation.result);
        assert!(validation.cause.is_none());
    }

    #[test]
    fn test_bad_extra_id_response() {
        let json = r#"{"result": false, "cause": "walletExtraId"}"#;
        let validation: AddressValidation = serde_json::from_str(json).unwrap();
        assert!(!validation.result);
        assert_eq!(validation.cause, Some(AddressIssue::WalletExtraId));
    }

    #[test]
    fn test_params_omit_unset_extra_id() {
        let params = ValidateWalletAddressParams::builder()
            .currency("BTC")
            .wallet_address("bc1qexample")
            .build();
        let json = serde_json::to_string(&params).unwrap();
        assert!(!json.contains("walletExtraId"));
    }
}
