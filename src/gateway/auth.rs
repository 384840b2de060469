use serde::Serialize;

use crate::config::Credentials;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAuthentication<'a> {
    pub name: &'a str,
    pub transaction_key: &'a str,
}

pub fn merchant_authentication(credentials: &Credentials) -> MerchantAuthentication<'_> {
    MerchantAuthentication {
        name: &credentials.api_login_id,
        transaction_key: &credentials.transaction_key,
    }
}
