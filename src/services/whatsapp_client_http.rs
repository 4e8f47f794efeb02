//! WhatsApp Cloud API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::domain::{AppError, Credentials, OutboundMessage, Parameters, ProviderConfig, SendError};
use crate::ports::{MessageClient, ProviderResponse};

/// HTTP client for the WhatsApp Cloud API message endpoint.
#[derive(Clone)]
pub struct HttpWhatsAppClient {
    credentials: Credentials,
    endpoint: Url,
    language_code: String,
    client: Client,
}

impl std::fmt::Debug for HttpWhatsAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWhatsAppClient")
            .field("endpoint", &self.endpoint)
            .field("language_code", &self.language_code)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl HttpWhatsAppClient {
    /// Create a new HTTP client for the configured account.
    pub fn new(credentials: Credentials, config: &ProviderConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.messages_endpoint(credentials.account_id())?,
            language_code: config.language_code.clone(),
            credentials,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn post(&self, message: &OutboundMessage) -> Result<ProviderResponse, SendError> {
        let recipient = || message.recipient.clone();

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.credentials.access_token())
            .header(CONTENT_TYPE, "application/json")
            .json(&message.payload())
            .send()
            .map_err(|e| SendError::Transport { recipient: recipient(), details: e.to_string() })?;

        let status = response.status();

        if status.is_success() {
            response
                .json::<Value>()
                .map_err(|e| SendError::InvalidResponse {
                    recipient: recipient(),
                    details: e.to_string(),
                })
        } else {
            let body = response.text().unwrap_or_default();
            Err(SendError::Provider {
                recipient: recipient(),
                status: status.as_u16(),
                detail: provider_error_detail(status, &body),
            })
        }
    }
}

impl MessageClient for HttpWhatsAppClient {
    fn send_template(
        &self,
        phone: &str,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<ProviderResponse, SendError> {
        let message = OutboundMessage::build(phone, template_name, parameters, &self.language_code);

        match self.post(&message) {
            Ok(response) => {
                tracing::info!("Message sent successfully to {}", message.recipient);
                Ok(response)
            }
            Err(err) => {
                tracing::error!("{}", err);
                Err(err)
            }
        }
    }
}

/// Best human-readable reason from a provider error body.
///
/// Prefers `error.message` (with `error.code` when present), then the raw body,
/// then the status line.
fn provider_error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let error = &value["error"];
        if let Some(message) = error["message"].as_str() {
            return match error["code"].as_i64() {
                Some(code) => format!("{} (code {})", message, code),
                None => message.to_string(),
            };
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status.canonical_reason().map(str::to_string).unwrap_or_else(|| status.to_string())
}
