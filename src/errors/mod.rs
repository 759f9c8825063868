//! Error types for the gateway.
//!
//! Every failure that can reach a caller is a [`GatewayError`] variant. The
//! HTTP layer matches on the variant to pick a status code.

mod error;

pub use error::{GatewayError, GatewayResult};
