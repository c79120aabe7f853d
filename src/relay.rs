use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;
use crate::contact::ContactPayload;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request could not be built: {0}")]
    Request(String),
    #[error("relay transport failed: {0}")]
    Transport(String),
    #[error("relay rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    pub fn request_body(&self, payload: &ContactPayload) -> Result<String, RelayError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };

        serde_json::to_string(&request).map_err(|error| RelayError::Request(error.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let body = self.request_body(payload)?;
        let response = Request::post(self.endpoint())
            .header("content-type", "application/json")
            .body(body)
            .map_err(|error| RelayError::Request(error.to_string()))?
            .send()
            .await
            .map_err(|error| RelayError::Transport(error.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        Err(RelayError::Rejected {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn request_body_wraps_form_fields_in_template_params() {
        let relay = EmailJsRelay::new(RelayConfig::default());
        let payload =
            ContactPayload::new("Jane Doe", "jane@example.com", "Hello").expect("valid payload");

        let body = relay.request_body(&payload).expect("body serializes");
        let parsed: Value = serde_json::from_str(&body).expect("body is JSON");

        assert_eq!(
            parsed,
            json!({
                "service_id": "service_cq2xj9n",
                "template_id": "template_i6mj2en",
                "user_id": "yZmHbk0g_BF4VD-Uw",
                "template_params": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "message": "Hello",
                },
            })
        );
    }

    #[test]
    fn rejection_message_carries_status() {
        let error = RelayError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "relay rejected submission with status 400: The user ID is invalid"
        );
    }
}
