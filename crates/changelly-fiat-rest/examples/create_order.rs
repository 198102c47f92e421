//! Create a purchase order and print the redirect URL
//!
//! Usage:
//! ```bash
//! export CHANGELLY_PUBLIC_KEY="..."
//! export CHANGELLY_PRIVATE_KEY="$(cat private_key.pem)"
//! cargo run --example create_order
//! ```

use changelly_fiat_rest::types::Decimal;
use changelly_fiat_rest::{ChangellyFiatClient, CreateOrderParams, Credentials, Provider, RestError};

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

    let params = CreateOrderParams::builder()
        .external_order_id("example-order-1")
        .external_user_id("example-user-1")
        .provider_code(Provider::Moonpay)
        .currency_from("USD")
        .currency_to("BTC")
        .amount_from(Decimal::from(100))
        .country("GB")
        .wallet_address("bc1qexample")
        .build();

    match client.create_order(&params).await {
        Ok(order) => {
            println!("Order {} created at {}", order.order_id, order.created_at);
            println!("Redirect the user to: {}", order.redirect_url);
        }
        Err(RestError::BadRequest { payload, .. }) => {
            eprintln!("Rejected ({}): {}", payload.error_type, payload.error_message);
            if let Some(details) = &payload.error_details {
                for detail in details {
                    eprintln!("  {}: {}", detail.cause, detail.value);
                }
            }
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
