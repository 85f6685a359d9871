//! SQLite storage implementation for the freight quote engine.
//!
//! This crate provides the database side of quote persistence using Diesel ORM
//! with SQLite. It implements the [`QuoteStore`](freightquote_core::quotes::QuoteStore)
//! trait defined in `freightquote-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The quote repository and its Diesel model
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (pricing, quote lifecycle)
//!                  │  QuoteStore
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod quotes;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

pub use quotes::QuoteRepository;

// Re-export from freightquote-core for convenience
pub use freightquote_core::errors::{DatabaseError, Error, Result};
