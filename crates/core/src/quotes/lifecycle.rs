//! Quote submission state machine.
//!
//! ```text
//! Draft → Validating → Calculating → Computed → Persisted
//!              │            │            │          ▲
//!              └─→ Rejected ←┘            └→ PersistFailed
//! ```

use serde::{Deserialize, Serialize};

use super::quotes_errors::QuoteError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteState {
    Draft,
    Validating,
    Calculating,
    /// Priced and returned to the caller; persistence may still be running.
    Computed,
    Persisted,
    /// The store rejected the record. A retry may still persist it.
    PersistFailed,
    /// Validation or lookup failure. Needs user correction.
    Rejected,
}

impl QuoteState {
    pub fn can_transition_to(self, next: QuoteState) -> bool {
        use QuoteState::*;
        matches!(
            (self, next),
            (Draft, Validating)
                | (Validating, Calculating)
                | (Validating, Rejected)
                | (Calculating, Computed)
                | (Calculating, Rejected)
                | (Computed, Persisted)
                | (Computed, PersistFailed)
                | (PersistFailed, Persisted)
                | (PersistFailed, PersistFailed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, QuoteState::Persisted | QuoteState::Rejected)
    }
}

/// Tracks one submission through [`QuoteState`].
#[derive(Debug, Clone)]
pub struct QuoteLifecycle {
    state: QuoteState,
    history: Vec<QuoteState>,
}

impl QuoteLifecycle {
    pub fn new() -> Self {
        Self {
            state: QuoteState::Draft,
            history: vec![QuoteState::Draft],
        }
    }

    pub fn state(&self) -> QuoteState {
        self.state
    }

    pub fn history(&self) -> &[QuoteState] {
        &self.history
    }

    pub fn advance(&mut self, next: QuoteState) -> Result<(), QuoteError> {
        if !self.state.can_transition_to(next) {
            return Err(QuoteError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        self.history.push(next);
        Ok(())
    }
}

impl Default for QuoteLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
