use crate::ports::{MessageClient, Sleeper};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: MessageClient, S: Sleeper> {
    client: C,
    sleeper: S,
}

impl<C: MessageClient, S: Sleeper> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(client: C, sleeper: S) -> Self {
        Self { client, sleeper }
    }

    /// Get a reference to the message client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the pacing sleeper.
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }
}
