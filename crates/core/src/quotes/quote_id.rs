use chrono::{DateTime, Utc};
use rand::Rng;

use super::quotes_constants::{QUOTE_ID_PREFIX, QUOTE_ID_RANDOM_BOUND};

/// Produces display identifiers for computed quotes.
///
/// Identifiers are advisory: they are shown to the customer and stored
/// alongside the record, but nothing enforces uniqueness.
pub trait QuoteIdGenerator: Send + Sync {
    fn generate(&self, now: DateTime<Utc>) -> String;
}

/// `COT-<unix_ms>-<0..999>`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampQuoteIdGenerator;

impl QuoteIdGenerator for TimestampQuoteIdGenerator {
    fn generate(&self, now: DateTime<Utc>) -> String {
        let suffix = rand::thread_rng().gen_range(0..QUOTE_ID_RANDOM_BOUND);
        format!("{}-{}-{}", QUOTE_ID_PREFIX, now.timestamp_millis(), suffix)
    }
}

/// Splits a quote id into its millisecond timestamp and random suffix.
pub fn parse_quote_id(id: &str) -> Option<(i64, u16)> {
    let rest = id.strip_prefix(QUOTE_ID_PREFIX)?.strip_prefix('-')?;
    let (millis, suffix) = rest.split_once('-')?;
    let millis = millis.parse::<i64>().ok()?;
    let suffix = suffix.parse::<u16>().ok()?;
    (suffix < QUOTE_ID_RANDOM_BOUND).then_some((millis, suffix))
}
