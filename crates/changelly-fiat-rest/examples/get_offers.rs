//! Fetch purchase offers for a currency pair
//!
//! Usage:
//! ```bash
//! export CHANGELLY_PUBLIC_KEY="..."
//! export CHANGELLY_PRIVATE_KEY="$(cat private_key.pem)"
//! cargo run --example get_offers
//! ```

use changelly_fiat_rest::types::Decimal;
use changelly_fiat_rest::{ChangellyFiatClient, Credentials, GetOffersParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "changelly_fiat_rest=debug".into()),
        )
        .init();

    let creds = Credentials::from_env()?;
    let client = ChangellyFiatClient::new(creds);

    let params = GetOffersParams::builder()
        .currency_from("USD")
        .currency_to("BTC")
        .amount_from(Decimal::from(100))
        .country("GB")
        .build();

    for offer in client.get_offers(&params).await? {
        match offer.as_quote() {
            Some(quote) => println!(
                "{:>8}: rate {} fee {} expect {}",
                quote.provider_code, quote.rate, quote.fee, quote.amount_expected_to
            ),
            None => {
                let failure = offer.as_failure().expect("failed offer");
                println!(
                    "{:>8}: {} ({})",
                    failure.provider_code, failure.error_message, failure.error_type
                );
            }
        }
    }

    Ok(())
}
