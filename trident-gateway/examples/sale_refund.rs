//! Runs a sale and, if it goes through, refunds it.
//!
//! ```sh
//! TRIDENT_PROFILE_ID=... TRIDENT_PROFILE_KEY=... cargo run --example sale_refund
//! ```
//!
//! `TRIDENT_ENV` selects the gateway (`cert`, `test` or `live`) and defaults to `cert`.

use trident_gateway::{
    client::HttpTransport,
    request::TransactionRequest,
    types::{GatewayEnvironment, TransactionType},
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let profile_id = std::env::var("TRIDENT_PROFILE_ID").unwrap_or_else(|_| "profileid".into());
    let profile_key = std::env::var("TRIDENT_PROFILE_KEY").unwrap_or_else(|_| "profilekey".into());
    let environment: GatewayEnvironment = std::env::var("TRIDENT_ENV")
        .unwrap_or_else(|_| "cert".into())
        .parse()
        .expect("TRIDENT_ENV must be one of cert, test, live");
    tracing::info!("Using the {} gateway at {}", environment, environment.url());

    let transport = HttpTransport::new().expect("Failed to build HTTP client");

    let sale = TransactionRequest::new(environment.url(), TransactionType::Sale);
    sale.add_credentials(&profile_id, &profile_key);
    sale.add_card_data("4012888812348882", "1216");
    sale.add_avs_data("123 N. Main", "55555");
    sale.add_amount("1.00");

    let sale_response = match sale.run(&transport) {
        Ok(response) => response,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };
    println!("Sale error code: {}", sale_response.value_or_empty("error_code"));
    println!("Sale resp text: {}", sale_response.response_text().unwrap_or_default());

    let transaction_id = match sale_response.transaction_id() {
        Some(id) if sale_response.is_approved() => id,
        _ => {
            println!("Sale was not approved; skipping refund");
            return;
        }
    };

    let refund = TransactionRequest::new(environment.url(), TransactionType::Refund);
    refund.add_credentials(&profile_id, &profile_key);
    refund.add_transaction_id(transaction_id);

    match refund.run(&transport) {
        Ok(response) => {
            println!("Refund error code: {}", response.value_or_empty("error_code"));
            println!("Refund resp text: {}", response.response_text().unwrap_or_default());
        }
        Err(err) => println!("Error: {err}"),
    }
}
