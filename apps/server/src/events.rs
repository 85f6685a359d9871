//! Quote event sink for the web server runtime.
//!
//! Events are handed to a background worker over an unbounded channel so
//! `emit()` never blocks the submission path. The worker logs each event and
//! keeps per-outcome counters for the health endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use freightquote_core::events::{QuoteEvent, QuoteEventSink};
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Default)]
pub struct QuoteOutcomeStats {
    computed: AtomicU64,
    persisted: AtomicU64,
    persist_failed: AtomicU64,
    rejected: AtomicU64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutcomeSnapshot {
    pub computed: u64,
    pub persisted: u64,
    pub persist_failed: u64,
    pub rejected: u64,
}

impl QuoteOutcomeStats {
    fn record(&self, event: &QuoteEvent) {
        let counter = match event {
            QuoteEvent::Computed { .. } => &self.computed,
            QuoteEvent::Persisted { .. } => &self.persisted,
            QuoteEvent::PersistFailed { .. } => &self.persist_failed,
            QuoteEvent::Rejected { .. } => &self.rejected,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QuoteOutcomeSnapshot {
        QuoteOutcomeSnapshot {
            computed: self.computed.load(Ordering::Relaxed),
            persisted: self.persisted.load(Ordering::Relaxed),
            persist_failed: self.persist_failed.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

pub struct WebQuoteEventSink {
    tx: mpsc::UnboundedSender<QuoteEvent>,
}

impl WebQuoteEventSink {
    /// Creates the sink and spawns its worker. Must be called inside a Tokio
    /// runtime.
    pub fn start(stats: Arc<QuoteOutcomeStats>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(quote_event_worker(rx, stats));
        Self { tx }
    }
}

impl QuoteEventSink for WebQuoteEventSink {
    fn emit(&self, event: QuoteEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Quote event worker has stopped; event dropped");
        }
    }
}

async fn quote_event_worker(
    mut rx: mpsc::UnboundedReceiver<QuoteEvent>,
    stats: Arc<QuoteOutcomeStats>,
) {
    tracing::info!("Quote event worker started");
    while let Some(event) = rx.recv().await {
        stats.record(&event);
        tracing::debug!(state = ?event.state(), "quote lifecycle advanced");
        match &event {
            QuoteEvent::Computed {
                quote_id,
                distance_km,
                price,
            } => tracing::info!(quote_id = %quote_id, distance_km, price, "quote computed"),
            QuoteEvent::Persisted {
                quote_id,
                stored_id,
            } => tracing::info!(quote_id = %quote_id, stored_id = %stored_id, "quote persisted"),
            QuoteEvent::PersistFailed { quote_id, error } => {
                tracing::warn!(quote_id = %quote_id, error = %error, "quote persistence failed")
            }
            QuoteEvent::Rejected { reason } => {
                tracing::info!(reason = %reason, "quote rejected")
            }
        }
    }
}
