//! Quote events module.
//!
//! Provides the quote lifecycle event types and the sink trait the quote
//! service reports through. Persistence outcomes arrive here after the
//! computed quote has already been returned to the caller.

mod quote_event;
mod sink;

pub use quote_event::*;
pub use sink::*;
