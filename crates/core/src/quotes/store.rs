//! Quote persistence interface.

use std::sync::Mutex;

use async_trait::async_trait;

use super::quotes_model::{QuoteRecord, StoredQuote};
use crate::errors::Result;

/// Accepts computed quote records.
///
/// Timeouts and retries are the implementation's concern. The quote service
/// treats any error as non-fatal.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn save(&self, record: &QuoteRecord) -> Result<StoredQuote>;
}

/// Process-local store for hosts without a database, and for tests.
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    quotes: Mutex<Vec<StoredQuote>>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<StoredQuote> {
        self.quotes.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.quotes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn save(&self, record: &QuoteRecord) -> Result<StoredQuote> {
        let mut quotes = self.quotes.lock().unwrap();
        let stored = StoredQuote {
            id: format!("mem-{}", quotes.len() + 1),
            record: record.clone(),
        };
        quotes.push(stored.clone());
        Ok(stored)
    }
}
