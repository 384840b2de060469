#![allow(dead_code)]

use authnet_charge::ChargeRequest;
use tracing_subscriber::EnvFilter;
use wiremock::{Request, Respond, ResponseTemplate};

pub const API_PATH: &str = "/xml/v1/request.api";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sample_request() -> ChargeRequest {
    ChargeRequest {
        number: "4242424242424242".into(),
        exp: "0822".into(),
        code: "999".into(),
        amount: 2.99,
        email: "a@b.com".into(),
        first_name: "CJ".into(),
        last_name: "Brewer".into(),
        description: None,
    }
}

/// Stub gateway replying with the received body prefixed by one character.
pub struct EchoWithPrefix(pub &'static str);

impl Respond for EchoWithPrefix {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = format!("{}{}", self.0, String::from_utf8_lossy(&request.body));
        ResponseTemplate::new(200).set_body_string(body)
    }
}
