//! Pricing module - rate lookup and the quote price formula.

mod pricing_calculator;
mod pricing_model;
mod rate_table;


pub use pricing_calculator::PricingCalculator;
pub use pricing_model::{PriceBreakdown, PricingInput, PricingParameters};
pub use rate_table::RateTable;
