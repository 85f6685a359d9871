//! Freightquote Core - shipping quote pricing engine.
//!
//! This crate contains the pricing logic behind the quote calculator:
//! reference data, distance resolution, rate lookup, price derivation and
//! the quote lifecycle. It is database-agnostic and defines the
//! [`quotes::QuoteStore`] trait implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod distance;
pub mod errors;
pub mod events;
pub mod pricing;
pub mod quotes;
pub mod reference;

// Re-export the types hosts touch most often
pub use distance::{Coordinates, DistanceResolver};
pub use pricing::{PricingCalculator, PricingInput, PricingParameters, RateTable};
pub use reference::ReferenceData;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
