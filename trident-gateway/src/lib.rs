//! # Trident Gateway
//!
//! A blocking client for the Merchant e-Solutions Trident payment gateway API.
//!
//! A transaction is a list of form parameters POSTed to the gateway; the gateway answers
//! with a flat `key=value&...` body. This crate wraps that exchange:
//!
//! - **[`request`]**: [`TransactionRequest`](request::TransactionRequest), a thread-safe
//!   parameter list with typed helpers and deterministic form serialization.
//! - **[`response`]**: [`TransactionResponse`](response::TransactionResponse), the decoded
//!   reply with named accessors and the approval check.
//! - **[`transport`]**: the [`Transport`](transport::Transport) trait a request runs over.
//! - **[`client`]**: [`HttpTransport`](client::HttpTransport), the `reqwest` implementation
//!   (feature `http-transport`, on by default).
//! - **[`types`]**: transaction types, gateway environments and field names.
//!
//! ## Running a Sale
//!
//! ```no_run
//! use trident_gateway::{
//!     client::HttpTransport,
//!     request::TransactionRequest,
//!     types::{GatewayEnvironment, TransactionType},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new()?;
//!
//! let sale = TransactionRequest::new(GatewayEnvironment::Cert.url(), TransactionType::Sale);
//! sale.add_credentials("profile-id", "profile-key");
//! sale.add_card_data("4012888812348882", "1216");
//! sale.add_amount("1.00");
//!
//! let response = sale.run(&transport)?;
//! if response.is_approved() {
//!     println!("Approved: {}", response.transaction_id().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Transports
//!
//! Anything implementing [`Transport`](transport::Transport) can carry a request, which is
//! how tests run without a network:
//!
//! ```
//! use trident_gateway::{
//!     request::TransactionRequest,
//!     transport::Transport,
//!     types::TransactionType,
//! };
//!
//! struct Decline;
//!
//! impl Transport for Decline {
//!     type Error = std::convert::Infallible;
//!
//!     fn execute(&self, _url: &str, _body: &str) -> Result<String, Self::Error> {
//!         Ok("error_code=400&auth_response_text=DECLINE".to_owned())
//!     }
//! }
//!
//! let request = TransactionRequest::new("https://gateway.invalid/api", TransactionType::Verify);
//! let response = request.run(&Decline).unwrap();
//! assert!(!response.is_approved());
//! ```

pub mod request {
    pub use trident_core::request::*;
}

pub mod response {
    pub use trident_core::response::*;
}

pub mod transport {
    pub use trident_core::transport::*;
}

pub mod types {
    pub use trident_core::types::*;
}

pub mod errors {
    pub use trident_core::errors::*;
}

#[cfg(feature = "http-transport")]
pub mod config;
#[cfg(feature = "http-transport")]
pub mod client;
