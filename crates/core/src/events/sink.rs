//! Quote event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::QuoteEvent;

/// Trait for receiving quote events.
///
/// `emit()` runs on the submission path or inside the persistence task, so
/// it must be fast and must not fail. Hosts that forward events elsewhere
/// should queue them.
pub trait QuoteEventSink: Send + Sync {
    fn emit(&self, event: QuoteEvent);
}

/// No-op implementation for hosts that don't consume events.
#[derive(Clone, Default)]
pub struct NoOpQuoteEventSink;

impl QuoteEventSink for NoOpQuoteEventSink {
    fn emit(&self, _event: QuoteEvent) {}
}

/// Collecting sink for tests.
#[derive(Clone, Default)]
pub struct MockQuoteEventSink {
    events: Arc<Mutex<Vec<QuoteEvent>>>,
}

impl MockQuoteEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<QuoteEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl QuoteEventSink for MockQuoteEventSink {
    fn emit(&self, event: QuoteEvent) {
        self.events.lock().unwrap().push(event);
    }
}
