use std::fmt::Display;

/// Charge failure. The underlying transport and JSON errors are carried unchanged.
#[derive(Debug)]
pub enum GatewayError {
    /// Connection, invalid endpoint, non-2xx status or body read failure
    RequestError(reqwest::Error),
    /// Response text is not JSON once the leading artifact is dropped
    GatewayDeserialization(serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::GatewayDeserialization(value)
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::RequestError(e) => Some(e),
            GatewayError::GatewayDeserialization(e) => Some(e),
        }
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::RequestError(e) => write!(f, "http request error: {e}"),
            GatewayError::GatewayDeserialization(e) => {
                write!(f, "gateway response deserialization: {e}")
            }
        }
    }
}
