use serde::Serialize;

use crate::gateway::auth::MerchantAuthentication;

/// Top level body of a `createTransactionRequest` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionEnvelope<'a> {
    pub create_transaction_request: CreateTransactionRequest<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest<'a> {
    pub merchant_authentication: MerchantAuthentication<'a>,
    /// Reserved, always sent as `null`
    pub client_id: Option<&'a str>,
    pub transaction_request: TransactionRequest<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    AuthCaptureTransaction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest<'a> {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub payment: Payment<'a>,
    pub customer: Customer<'a>,
    pub bill_to: BillTo<'a>,
    pub order: Order<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment<'a> {
    pub credit_card: CreditCard<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard<'a> {
    pub card_number: &'a str,
    pub expiration_date: &'a str, // Format: mmyy
    pub card_code: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Customer<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTo<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Sent even when empty
#[derive(Debug, Serialize)]
pub struct Order<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}
