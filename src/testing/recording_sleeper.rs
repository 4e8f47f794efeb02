use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::Sleeper;

/// Records requested pauses instead of blocking.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    pub pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}
