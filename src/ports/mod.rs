mod message_client;
mod recipient_source;
mod sleeper;

pub use message_client::{DryRunClient, MessageClient, ProviderResponse};
pub use recipient_source::RecipientSource;
pub use sleeper::{Sleeper, ThreadSleeper};
