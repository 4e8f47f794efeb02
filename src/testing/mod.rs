mod fake_message_client;
mod in_memory_source;
mod log_buffer;
mod recording_sleeper;

pub use fake_message_client::FakeMessageClient;
pub use in_memory_source::InMemorySource;
pub use log_buffer::LogBuffer;
pub use recording_sleeper::RecordingSleeper;
