//! This crate is split in 3 modules:
//!
//! - [request] (charge parameters supplied by the caller)
//! - [config] (merchant credentials and endpoint)
//! - [gateway] (Authorize.net request body, HTTP call and response handling)
#![doc = include_str!("../README.md")]

pub mod config;
/// Authorize.net integration
///
/// This module defines the types and methods to communicate with the Authorize.net JSON API.
pub mod gateway;
pub mod request;

pub use config::Credentials;
pub use gateway::{AuthorizeNetGateway, Result, error::GatewayError};
pub use request::ChargeRequest;

/// Charge a card using credentials from `AUTH_NET_API`, `AUTH_NET_KEY` and `AUTH_NET_URL`.
///
/// The environment is read on every call.
pub async fn charge(request: &ChargeRequest) -> Result<serde_json::Value> {
    AuthorizeNetGateway::new()
        .charge(&Credentials::from_env(), request)
        .await
}
