//! Balance repository and ledger service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::ledger_model::{AccountBalance, LedgerEntry};
use crate::errors::Result;

/// Trait defining the contract for balance storage operations.
///
/// Accounts are created implicitly: reading an untouched user yields zero,
/// and the first mutation materializes the row. Each mutation must be
/// atomic - the balance update and its audit entry commit together, and
/// concurrent mutations of one user must not lose updates.
#[async_trait]
pub trait BalanceRepositoryTrait: Send + Sync {
    /// Current balance, `0` for accounts never touched.
    fn get_balance(&self, user_id: &str) -> Result<Decimal>;

    /// Atomically adds `amount` (already validated positive) and appends a
    /// DEPOSIT entry. Returns the updated balance record.
    async fn deposit(&self, user_id: &str, amount: Decimal) -> Result<AccountBalance>;

    /// Atomically subtracts `amount` and appends a WITHDRAWAL entry. Fails
    /// with `Error::InsufficientFunds` - leaving the balance untouched -
    /// when `amount` exceeds the stored balance.
    async fn withdraw(&self, user_id: &str, amount: Decimal) -> Result<AccountBalance>;

    /// A user's ledger entries, newest first.
    fn list_entries(&self, user_id: &str) -> Result<Vec<LedgerEntry>>;
}

/// Trait defining the contract for the balance ledger service.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Current balance, `0` for accounts never touched. Never fails for a
    /// well-formed user id.
    fn get_balance(&self, user_id: &str) -> Result<Decimal>;

    /// Deposits funds; returns the new balance.
    async fn add_funds(&self, user_id: &str, amount: Decimal) -> Result<Decimal>;

    /// Withdraws funds; returns the new balance.
    async fn withdraw_funds(&self, user_id: &str, amount: Decimal) -> Result<Decimal>;

    /// A user's mutation history, newest first.
    fn get_history(&self, user_id: &str) -> Result<Vec<LedgerEntry>>;
}
