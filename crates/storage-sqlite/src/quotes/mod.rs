//! SQLite storage implementation for quotes.

mod model;
mod repository;

pub use model::QuoteDB;
pub use repository::{QuoteRepository, DEFAULT_RECENT_LIMIT};
