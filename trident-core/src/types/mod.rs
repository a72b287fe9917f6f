//! Core types used across the Trident client.

mod common;
mod environment;
pub mod fields;
mod transaction_type;

pub use common::*;
pub use environment::*;
pub use transaction_type::*;
