use std::fmt::Debug;

pub const API_LOGIN_ID_VAR: &str = "AUTH_NET_API";
pub const TRANSACTION_KEY_VAR: &str = "AUTH_NET_KEY";
pub const ENDPOINT_VAR: &str = "AUTH_NET_URL";

/// Merchant credentials and the API endpoint they are sent to.
///
/// Nothing here is validated. Empty values are sent as-is and the gateway decides what to do
/// with them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API login id, sent as `merchantAuthentication.name`
    pub api_login_id: String,
    pub transaction_key: String,
    /// Full URL of the JSON API, see [Credentials::SANDBOX_URL] and [Credentials::PRODUCTION_URL]
    pub endpoint: String,
}

impl Credentials {
    pub const SANDBOX_URL: &str = "https://apitest.authorize.net/xml/v1/request.api";
    pub const PRODUCTION_URL: &str = "https://api.authorize.net/xml/v1/request.api";

    pub fn new(
        api_login_id: impl Into<String>,
        transaction_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            api_login_id: api_login_id.into(),
            transaction_key: transaction_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Read `AUTH_NET_API`, `AUTH_NET_KEY` and `AUTH_NET_URL` from the process environment.
    ///
    /// Values are looked up on every call, so changes to the environment between two charges are
    /// picked up by the second one. Missing variables become empty strings.
    pub fn from_env() -> Self {
        Self {
            api_login_id: env_or_empty(API_LOGIN_ID_VAR),
            transaction_key: env_or_empty(TRANSACTION_KEY_VAR),
            endpoint: env_or_empty(ENDPOINT_VAR),
        }
    }

    /// Same as [Credentials::from_env], loading a `.env` file first if there is one.
    /// Variables already set in the process are not overridden.
    pub fn from_dotenv() -> Self {
        match dotenvy::dotenv() {
            Ok(p) => {
                tracing::info!(path = %p.display(), "Loaded environment variables from .env file")
            }
            Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
        };
        Self::from_env()
    }
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|e| {
        tracing::warn!(variable = name, "Credential variable is not usable ({e}), sending it empty");
        String::new()
    })
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_login_id", &self.api_login_id)
            .field("transaction_key", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
