//! Quote event types.

use serde::{Deserialize, Serialize};

use crate::quotes::QuoteState;

/// Facts emitted by the quote service as a submission moves through its
/// lifecycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuoteEvent {
    /// Pricing finished and the quote was handed back to the caller.
    Computed {
        quote_id: String,
        distance_km: u32,
        price: i64,
    },

    /// The quote store accepted the record.
    Persisted { quote_id: String, stored_id: String },

    /// The quote store rejected the record. The computed quote stands.
    PersistFailed { quote_id: String, error: String },

    /// Validation or a reference lookup stopped the submission.
    Rejected { reason: String },
}

impl QuoteEvent {
    pub fn computed(quote_id: &str, distance_km: u32, price: i64) -> Self {
        Self::Computed {
            quote_id: quote_id.to_string(),
            distance_km,
            price,
        }
    }

    pub fn persisted(quote_id: &str, stored_id: &str) -> Self {
        Self::Persisted {
            quote_id: quote_id.to_string(),
            stored_id: stored_id.to_string(),
        }
    }

    pub fn persist_failed(quote_id: &str, error: impl ToString) -> Self {
        Self::PersistFailed {
            quote_id: quote_id.to_string(),
            error: error.to_string(),
        }
    }

    pub fn rejected(reason: impl ToString) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }

    /// Quote id the event refers to, if any.
    pub fn quote_id(&self) -> Option<&str> {
        match self {
            Self::Computed { quote_id, .. }
            | Self::Persisted { quote_id, .. }
            | Self::PersistFailed { quote_id, .. } => Some(quote_id),
            Self::Rejected { .. } => None,
        }
    }

    /// Lifecycle state the quote entered when the event was emitted.
    pub fn state(&self) -> QuoteState {
        match self {
            Self::Computed { .. } => QuoteState::Computed,
            Self::Persisted { .. } => QuoteState::Persisted,
            Self::PersistFailed { .. } => QuoteState::PersistFailed,
            Self::Rejected { .. } => QuoteState::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_value(QuoteEvent::persisted("COT-1-2", "abc")).unwrap();
        assert_eq!(json["type"], "persisted");
        assert_eq!(json["quote_id"], "COT-1-2");
        assert_eq!(json["stored_id"], "abc");
    }

    #[test]
    fn test_quote_id_accessor() {
        assert_eq!(QuoteEvent::computed("COT-1-2", 10, 99).quote_id(), Some("COT-1-2"));
        assert_eq!(QuoteEvent::rejected("nope").quote_id(), None);
    }

    #[test]
    fn test_event_reports_lifecycle_state() {
        assert_eq!(QuoteEvent::computed("COT-1-2", 10, 99).state(), QuoteState::Computed);
        assert_eq!(QuoteEvent::persisted("COT-1-2", "abc").state(), QuoteState::Persisted);
        assert_eq!(
            QuoteEvent::persist_failed("COT-1-2", "offline").state(),
            QuoteState::PersistFailed
        );
        assert_eq!(QuoteEvent::rejected("nope").state(), QuoteState::Rejected);
    }
}
