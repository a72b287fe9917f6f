//! Trident core library.
//!
//! This library provides the request/response lifecycle for the Merchant e-Solutions
//! Trident payment gateway API: parameter accumulation, form serialization, response
//! decoding and the [`transport::Transport`] seam used to execute a call.

pub mod errors;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;
