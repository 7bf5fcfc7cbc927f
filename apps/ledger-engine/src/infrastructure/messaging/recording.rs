//! Recording event emitter for test observation.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{EmitError, EventEmitterPort};

/// Event emitter that records every emission for assertions.
#[derive(Debug, Default)]
pub struct RecordingEventEmitter {
    emitted: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingEventEmitter {
    /// Create a new empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            emitted: Mutex::new(Vec::new()),
        }
    }

    /// Number of events emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.lock().unwrap().len()
    }

    /// True if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.lock().unwrap().is_empty()
    }

    /// Snapshot of `(name, payload)` pairs in emission order.
    #[must_use]
    pub fn emitted(&self) -> Vec<(String, Vec<u8>)> {
        self.emitted.lock().unwrap().clone()
    }

    /// Event names only, in emission order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.emitted
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
impl EventEmitterPort for RecordingEventEmitter {
    async fn emit(&self, name: &str, payload: Vec<u8>) -> Result<(), EmitError> {
        let mut emitted = self.emitted.lock().unwrap();
        emitted.push((name.to_string(), payload));
        Ok(())
    }
}
