//! Quote lifecycle module.
//!
//! - [`quotes_model`] - Requests, computed quotes and the stored record shape
//! - [`lifecycle`] - Submission state machine
//! - [`quote_id`] - Quote identifier generation
//! - [`store`] - The narrow persistence interface the service calls through
//! - [`quotes_service`] - Validation, pricing and fire-and-forget persistence
//!
//! ```text
//! QuoteService → DistanceResolver → DistanceCache
//!      │       → PricingCalculator → RateTable
//!      ├──────→ QuoteStore (spawned, best-effort)
//!      └──────→ QuoteEventSink
//! ```

pub mod lifecycle;
pub mod quote_id;
pub mod quotes_constants;
mod quotes_errors;
pub mod quotes_model;
pub mod quotes_service;
mod quotes_traits;
pub mod store;

#[cfg(test)]
mod quotes_model_tests;

pub use lifecycle::{QuoteLifecycle, QuoteState};
pub use quote_id::{parse_quote_id, QuoteIdGenerator, TimestampQuoteIdGenerator};
pub use quotes_errors::QuoteError;
pub use quotes_model::{
    CustomerContact, QuoteCalculation, QuoteComputed, QuoteDetails, QuoteRecord, QuoteRequest,
    QuoteStatus, StoredQuote,
};
pub use quotes_service::{QuoteService, QuoteServiceOptions};
pub use quotes_traits::QuoteServiceTrait;
pub use store::{InMemoryQuoteStore, QuoteStore};
