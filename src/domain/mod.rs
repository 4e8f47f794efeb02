pub mod configuration;
pub mod credentials;
pub mod error;
pub mod message;
pub mod phone;
pub mod send_error;
pub mod summary;
pub mod table;

pub use configuration::{BatchConfig, Pacing, ProviderConfig, SendConfig};
pub use credentials::Credentials;
pub use error::AppError;
pub use message::OutboundMessage;
pub use phone::normalize_phone;
pub use send_error::SendError;
pub use summary::{BatchSummary, FailureRecord};
pub use table::{Cell, Parameters, RecipientRow, Table};
