use serde::Deserialize;

use crate::gateway::mask::{MaskPolicy, Masked};

/// Charge parameters as supplied by the caller.
///
/// Values are forwarded to the gateway untouched, it is the only validator.
#[derive(Clone, PartialEq)]
pub struct ChargeRequest {
    /// Card number
    pub number: String,
    /// Expiration in `mmyy` format
    pub exp: String,
    /// Card verification code
    pub code: String,
    /// Amount to charge, e.g. `2.99`
    pub amount: f64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
}

// Implement deserialize manually to conceal any "helpful" error messages that can leak
// sensitive data
impl<'de> serde::de::Deserialize<'de> for ChargeRequest {
    fn deserialize<D>(deserializer: D) -> Result<ChargeRequest, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ChargeRequestShadow {
            number: String,
            exp: String,
            code: String,
            amount: f64,
            email: String,
            first_name: String,
            last_name: String,
            #[serde(default)]
            description: Option<String>,
        }

        impl From<ChargeRequestShadow> for ChargeRequest {
            fn from(
                ChargeRequestShadow {
                    number,
                    exp,
                    code,
                    amount,
                    email,
                    first_name,
                    last_name,
                    description,
                }: ChargeRequestShadow,
            ) -> Self {
                Self {
                    number,
                    exp,
                    code,
                    amount,
                    email,
                    first_name,
                    last_name,
                    description,
                }
            }
        }

        ChargeRequestShadow::deserialize(deserializer)
            .map(Into::into)
            .map_err(|_| serde::de::Error::custom("failed to deserialize charge request"))
    }
}

impl std::fmt::Debug for ChargeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChargeRequest")
            .field("number", &Masked::mask(&self.number))
            .field("exp", &"****")
            .field("code", &"***")
            .field("amount", &self.amount)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("description", &self.description)
            .finish()
    }
}
