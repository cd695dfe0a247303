use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::ledger_model::{validate_amount, LedgerEntry};
use super::ledger_traits::{BalanceRepositoryTrait, LedgerServiceTrait};
use crate::errors::Result;

/// Service maintaining non-negative per-user balances.
pub struct LedgerService {
    repository: Arc<dyn BalanceRepositoryTrait>,
}

impl LedgerService {
    /// Creates a new LedgerService instance.
    pub fn new(repository: Arc<dyn BalanceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    fn get_balance(&self, user_id: &str) -> Result<Decimal> {
        self.repository.get_balance(user_id)
    }

    async fn add_funds(&self, user_id: &str, amount: Decimal) -> Result<Decimal> {
        validate_amount(amount)?;
        let balance = self.repository.deposit(user_id, amount).await?;
        debug!(
            "Deposited {} for user {}; balance now {}",
            amount, user_id, balance.balance
        );
        Ok(balance.balance)
    }

    async fn withdraw_funds(&self, user_id: &str, amount: Decimal) -> Result<Decimal> {
        validate_amount(amount)?;
        let balance = self.repository.withdraw(user_id, amount).await?;
        debug!(
            "Withdrew {} for user {}; balance now {}",
            amount, user_id, balance.balance
        );
        Ok(balance.balance)
    }

    fn get_history(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        self.repository.list_entries(user_id)
    }
}
