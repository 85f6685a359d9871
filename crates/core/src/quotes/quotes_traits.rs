use async_trait::async_trait;

use super::quotes_errors::QuoteError;
use super::quotes_model::{QuoteCalculation, QuoteComputed, QuoteRequest, StoredQuote};
use crate::errors::Result;

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Range check against the cargo band, then required-field check.
    fn validate_request(&self, request: &QuoteRequest) -> std::result::Result<(), QuoteError>;

    /// Validates and prices a request without assigning an id or persisting.
    fn calculate(&self, request: &QuoteRequest) -> Result<QuoteCalculation>;

    /// Validates, prices and identifies a request. Persistence is started in
    /// the background and reported through the event sink.
    async fn submit_quote(&self, request: QuoteRequest) -> Result<QuoteComputed>;

    /// Stores an already computed quote, for hosts retrying after a failure.
    async fn persist_quote(&self, quote: &QuoteComputed) -> Result<StoredQuote>;
}
