use thiserror::Error;

use super::lifecycle::QuoteState;
use crate::reference::QuantityRange;

/// Failures of a quote submission. All of them are recoverable at the
/// request boundary; none is fatal to the host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Quantity outside the selected cargo band.
    #[error("The value must be between {range}")]
    QuantityOutOfRange {
        cargo_type: String,
        range: QuantityRange,
    },

    /// A selection is empty or a numeric field is not a number.
    #[error("Please complete all required fields with valid values.")]
    IncompleteRequest { missing: Vec<String> },

    #[error("Depot '{0}' not found")]
    DepotNotFound(String),

    #[error("Locality '{locality}' not found in zone {zone}")]
    LocalityNotFound { zone: String, locality: String },

    /// Only raised when the service is configured to reject unpriced
    /// combinations instead of quoting them at zero.
    #[error("No rate configured for '{cargo_type}' in zone {zone}")]
    RateNotFound { cargo_type: String, zone: String },

    #[error("Unable to price the quote with the given inputs")]
    PricingUnavailable,

    #[error("Invalid quote state transition from {from:?} to {to:?}")]
    InvalidTransition { from: QuoteState, to: QuoteState },
}

impl QuoteError {
    /// User-correctable input problems (field or range validation).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuoteError::QuantityOutOfRange { .. } | QuoteError::IncompleteRequest { .. }
        )
    }

    /// Reference data could not resolve part of the request.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            QuoteError::DepotNotFound(_)
                | QuoteError::LocalityNotFound { .. }
                | QuoteError::RateNotFound { .. }
        )
    }
}
