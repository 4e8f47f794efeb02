use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::domain::{OutboundMessage, Parameters, SendError};
use crate::ports::{MessageClient, ProviderResponse};

/// Records every message and fails for chosen normalized recipients.
#[derive(Clone, Default)]
pub struct FakeMessageClient {
    pub sent: Arc<Mutex<Vec<OutboundMessage>>>,
    failing: HashSet<String>,
}

impl FakeMessageClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, recipient: impl Into<String>) -> Self {
        self.failing.insert(recipient.into());
        self
    }

    pub fn sent_messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageClient for FakeMessageClient {
    fn send_template(
        &self,
        phone: &str,
        template_name: &str,
        parameters: &Parameters,
    ) -> Result<ProviderResponse, SendError> {
        let message = OutboundMessage::build(phone, template_name, parameters, "en");
        self.sent.lock().unwrap().push(message.clone());

        if self.failing.contains(&message.recipient) {
            return Err(SendError::Provider {
                recipient: message.recipient,
                status: 400,
                detail: "Invalid parameter".to_string(),
            });
        }

        Ok(json!({ "messages": [{ "id": format!("wamid.{}", message.recipient) }] }))
    }
}
