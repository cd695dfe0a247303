//! SQLite storage implementation for Roomly.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `roomly-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for requests, proposals, and balances
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. `roomly-core` is database-agnostic and works with traits.
//!
//! ```text
//!        roomly-core (domain)
//!                 │
//!                 ▼
//!      storage-sqlite (this crate)
//!                 │
//!                 ▼
//!             SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod balances;
pub mod proposals;
pub mod requests;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from roomly-core for convenience
pub use roomly_core::errors::{DatabaseError, Error, Result};
