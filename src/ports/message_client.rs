//! Message sending port definition.

use serde_json::{Value, json};

use crate::domain::{OutboundMessage, Parameters, SendError};

/// Parsed JSON returned by the provider on success.
pub type ProviderResponse = Value;

/// Port for delivering template messages.
pub trait MessageClient {
    /// Send one template message to `phone`.
    ///
    /// The phone number is normalized before the request is built. Failures are
    /// returned, never retried.
    fn send_template(
        &self,
        phone: &str,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<ProviderResponse, SendError>;
}

/// Client for rehearsing a batch without network calls.
#[derive(Debug, Clone)]
pub struct DryRunClient {
    language_code: String,
}

impl DryRunClient {
    pub fn new(language_code: impl Into<String>) -> Self {
        Self { language_code: language_code.into() }
    }
}

impl MessageClient for DryRunClient {
    fn send_template(
        &self,
        phone: &str,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<ProviderResponse, SendError> {
        let message = OutboundMessage::build(phone, template_name, parameters, &self.language_code);
        let payload = serde_json::to_string(&message.payload()).map_err(|e| {
            SendError::InvalidResponse {
                recipient: message.recipient.clone(),
                details: e.to_string(),
            }
        })?;

        tracing::info!(
            %payload,
            "Dry run: would send '{}' to {}",
            message.template_name,
            message.recipient
        );

        Ok(json!({
            "messaging_product": "whatsapp",
            "dry_run": true,
            "contacts": [{ "input": message.recipient, "wa_id": message.recipient }],
            "messages": [],
        }))
    }
}
