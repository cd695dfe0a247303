//! Roomly Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Roomly design
//! marketplace: the request/proposal lifecycle and the balance ledger.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod notifications;
pub mod proposals;
pub mod requests;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
