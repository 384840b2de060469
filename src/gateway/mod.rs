use reqwest::header::{ACCEPT, HeaderValue};
use tracing::instrument;

use crate::{
    config::Credentials,
    gateway::{error::GatewayError, transaction::CreateTransactionEnvelope},
    request::ChargeRequest,
};

/// Merchant authentication block
pub mod auth;
pub mod error;
/// Type conversions between caller input and gateway request body
mod from;
/// Requisite masking
pub mod mask;
/// Gateway request body
pub mod transaction;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Clone, Default)]
pub struct AuthorizeNetGateway {
    client: reqwest::Client,
}

impl AuthorizeNetGateway {
    pub fn new() -> Self {
        let client = reqwest::Client::new();
        Self { client }
    }

    /// Use a preconfigured client, e.g. with custom timeouts or proxy
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Submit one authorize-and-capture transaction.
    ///
    /// Exactly one POST is made. Any failure is returned as-is, there are no retries.
    #[instrument(skip_all)]
    pub async fn charge(
        &self,
        credentials: &Credentials,
        request: &ChargeRequest,
    ) -> Result<serde_json::Value> {
        let body = CreateTransactionEnvelope::new(credentials, request);
        let url = credentials.endpoint.as_str();
        tracing::debug!(
            %url,
            data = %mask::secure_serializable(&body),
            "Gateway API charge request"
        );
        let res = self
            .client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        tracing::debug!(%status, "Gateway API charge response status");

        // Body is read as bytes: decoding through the transport would drop a leading BOM
        let raw = res.error_for_status()?.bytes().await?;
        let response = parse_response(&String::from_utf8_lossy(&raw))?;
        tracing::debug!(
            data = %mask::secure_value(&response),
            %status,
            "Gateway API charge response"
        );
        Ok(response)
    }
}

/// Parse gateway response text.
///
/// The gateway prepends one character to its JSON payload. Exactly one character is dropped,
/// whatever it is, and the rest must be valid JSON.
pub fn parse_response(raw: &str) -> Result<serde_json::Value> {
    let mut chars = raw.chars();
    chars.next();
    Ok(serde_json::from_str(chars.as_str())?)
}
