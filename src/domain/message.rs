//! Outbound template message and its provider wire format.

use serde::Serialize;

use super::phone::normalize_phone;
use super::table::Parameters;

const MESSAGING_PRODUCT: &str = "whatsapp";

/// A template message addressed to one normalized recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub recipient: String,
    pub template_name: String,
    pub language_code: String,
    pub body_parameters: Vec<String>,
}

impl OutboundMessage {
    /// Normalize the phone number and flatten parameter values in column order.
    pub fn build(
        raw_phone: &str,
        template_name: &str,
        parameters: &Parameters,
        language_code: &str,
    ) -> Self {
        Self {
            recipient: normalize_phone(raw_phone),
            template_name: template_name.to_string(),
            language_code: language_code.to_string(),
            body_parameters: parameters.values().map(str::to_string).collect(),
        }
    }

    /// JSON body for the provider's message-send endpoint.
    pub fn payload(&self) -> MessagePayload<'_> {
        let components = if self.body_parameters.is_empty() {
            Vec::new()
        } else {
            vec![Component {
                kind: "body",
                parameters: self
                    .body_parameters
                    .iter()
                    .map(|text| TextParameter { kind: "text", text: text.as_str() })
                    .collect(),
            }]
        };

        MessagePayload {
            messaging_product: MESSAGING_PRODUCT,
            to: &self.recipient,
            kind: "template",
            template: Template {
                name: &self.template_name,
                language: Language { code: &self.language_code },
                components,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessagePayload<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    template: Template<'a>,
}

#[derive(Debug, Serialize)]
struct Template<'a> {
    name: &'a str,
    language: Language<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Language<'a> {
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    parameters: Vec<TextParameter<'a>>,
}

#[derive(Debug, Serialize)]
struct TextParameter<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}
