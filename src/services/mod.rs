pub mod logging;
mod whatsapp_client_http;
mod xlsx_recipient_source;

pub use whatsapp_client_http::HttpWhatsAppClient;
pub use xlsx_recipient_source::XlsxRecipientSource;
