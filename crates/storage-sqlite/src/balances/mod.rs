//! SQLite storage implementation for the balance ledger.

mod model;
mod repository;

pub use model::{BalanceDB, LedgerEntryDB};
pub use repository::BalanceRepository;
