//! Ledger module - per-user balances and their audit trail.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

#[cfg(test)]
mod ledger_service_tests;

pub use ledger_model::{validate_amount, AccountBalance, LedgerEntry, LedgerEntryKind};
pub use ledger_service::LedgerService;
pub use ledger_traits::{BalanceRepositoryTrait, LedgerServiceTrait};
