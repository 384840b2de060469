use crate::{
    config::Credentials,
    gateway::{
        auth,
        transaction::{
            BillTo, CreateTransactionEnvelope, CreateTransactionRequest, CreditCard, Customer,
            Order, Payment, TransactionRequest, TransactionType,
        },
    },
    request::ChargeRequest,
};

impl<'a> From<&'a ChargeRequest> for TransactionRequest<'a> {
    fn from(
        ChargeRequest {
            number,
            exp,
            code,
            amount,
            email,
            first_name,
            last_name,
            description,
        }: &'a ChargeRequest,
    ) -> Self {
        Self {
            transaction_type: TransactionType::AuthCaptureTransaction,
            amount: *amount,
            payment: Payment {
                credit_card: CreditCard {
                    card_number: number,
                    expiration_date: exp,
                    card_code: code,
                },
            },
            customer: Customer { email },
            bill_to: BillTo {
                first_name,
                last_name,
            },
            order: Order {
                description: description.as_deref(),
            },
        }
    }
}

impl<'a> CreateTransactionEnvelope<'a> {
    pub fn new(credentials: &'a Credentials, request: &'a ChargeRequest) -> Self {
        Self {
            create_transaction_request: CreateTransactionRequest {
                merchant_authentication: auth::merchant_authentication(credentials),
                client_id: None,
                transaction_request: request.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        config::Credentials, gateway::transaction::CreateTransactionEnvelope,
        request::ChargeRequest,
    };

    fn charge_request(description: Option<&str>) -> ChargeRequest {
        ChargeRequest {
            number: "4242424242424242".into(),
            exp: "0822".into(),
            code: "999".into(),
            amount: 2.99,
            email: "a@b.com".into(),
            first_name: "CJ".into(),
            last_name: "Brewer".into(),
            description: description.map(Into::into),
        }
    }

    #[test]
    fn body_shape() {
        let credentials = Credentials::new("login", "key", Credentials::SANDBOX_URL);
        let request = charge_request(Some("Two widgets"));
        let body = serde_json::to_value(CreateTransactionEnvelope::new(&credentials, &request))
            .unwrap();

        assert_eq!(
            body,
            json!({
                "createTransactionRequest": {
                    "merchantAuthentication": { "name": "login", "transactionKey": "key" },
                    "clientId": null,
                    "transactionRequest": {
                        "transactionType": "authCaptureTransaction",
                        "amount": 2.99,
                        "payment": {
                            "creditCard": {
                                "cardNumber": "4242424242424242",
                                "expirationDate": "0822",
                                "cardCode": "999"
                            }
                        },
                        "customer": { "email": "a@b.com" },
                        "billTo": { "firstName": "CJ", "lastName": "Brewer" },
                        "order": { "description": "Two widgets" }
                    }
                }
            })
        );
    }

    #[test]
    fn client_id_is_null_and_order_empty_without_description() {
        let credentials = Credentials::new("", "", "");
        let request = charge_request(None);
        let body =
            serde_json::to_string(&CreateTransactionEnvelope::new(&credentials, &request)).unwrap();

        assert!(body.contains(r#""clientId":null"#));
        assert!(body.contains(r#""order":{}"#));
        assert!(body.contains(r#""merchantAuthentication":{"name":"","transactionKey":""}"#));
    }

    #[test]
    fn values_are_not_validated() {
        let credentials = Credentials::new("login", "key", Credentials::PRODUCTION_URL);
        let mut request = charge_request(None);
        request.exp = "2022-08".into();
        request.amount = -1.5;
        request.number = "not a card".into();
        let body = serde_json::to_value(CreateTransactionEnvelope::new(&credentials, &request))
            .unwrap();

        let transaction = &body["createTransactionRequest"]["transactionRequest"];
        assert_eq!(transaction["amount"], json!(-1.5));
        assert_eq!(transaction["payment"]["creditCard"]["expirationDate"], "2022-08");
        assert_eq!(transaction["payment"]["creditCard"]["cardNumber"], "not a card");
    }
}
