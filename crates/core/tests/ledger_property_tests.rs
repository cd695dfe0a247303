//! Property-based tests for the balance ledger.
//!
//! These tests verify that ledger invariants hold across arbitrary
//! operation sequences, using the `proptest` crate for random test case
//! generation.

use async_trait::async_trait;
use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use roomly_core::errors::Error;
use roomly_core::ledger::{
    AccountBalance, BalanceRepositoryTrait, LedgerEntry, LedgerEntryKind, LedgerService,
    LedgerServiceTrait,
};
use roomly_core::Result;

// =============================================================================
// In-memory repository
// =============================================================================

#[derive(Clone, Default)]
struct InMemoryBalanceRepository {
    balances: Arc<Mutex<HashMap<String, Decimal>>>,
    entries: Arc<Mutex<Vec<LedgerEntry>>>,
}

#[async_trait]
impl BalanceRepositoryTrait for InMemoryBalanceRepository {
    fn get_balance(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(user_id)
            .copied()
            .unwrap_or(Decimal::ZERO))
    }

    async fn deposit(&self, user_id: &str, amount: Decimal) -> Result<AccountBalance> {
        let mut balances = self.balances.lock().unwrap();
        let balance = balances.entry(user_id.to_string()).or_insert(Decimal::ZERO);
        *balance += amount;
        let after = *balance;
        drop(balances);
        self.push_entry(user_id, LedgerEntryKind::Deposit, amount, after);
        Ok(AccountBalance {
            user_id: user_id.to_string(),
            balance: after,
            updated_at: Utc::now(),
        })
    }

    async fn withdraw(&self, user_id: &str, amount: Decimal) -> Result<AccountBalance> {
        let mut balances = self.balances.lock().unwrap();
        let balance = balances.entry(user_id.to_string()).or_insert(Decimal::ZERO);
        if amount > *balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        let after = *balance;
        drop(balances);
        self.push_entry(user_id, LedgerEntryKind::Withdrawal, amount, after);
        Ok(AccountBalance {
            user_id: user_id.to_string(),
            balance: after,
            updated_at: Utc::now(),
        })
    }

    fn list_entries(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        let mut entries: Vec<LedgerEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.reverse();
        Ok(entries)
    }
}

impl InMemoryBalanceRepository {
    fn push_entry(&self, user_id: &str, kind: LedgerEntryKind, amount: Decimal, after: Decimal) {
        let mut entries = self.entries.lock().unwrap();
        let id = format!("entry-{:06}", entries.len() + 1);
        entries.push(LedgerEntry {
            id,
            user_id: user_id.to_string(),
            kind,
            amount,
            balance_after: after,
            created_at: Utc::now(),
        });
    }
}

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
enum LedgerOp {
    Deposit(Decimal),
    Withdraw(Decimal),
}

/// Generates an amount between 0.01 and 10_000.00 in whole cents.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        arb_amount().prop_map(LedgerOp::Deposit),
        arb_amount().prop_map(LedgerOp::Withdraw),
    ]
}

fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<LedgerOp>> {
    proptest::collection::vec(arb_op(), 0..=max_len)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance never goes negative and always equals the fold of the
    /// operations that succeeded; a failed withdrawal leaves the balance
    /// exactly where it was.
    #[test]
    fn prop_balance_matches_successful_operations(ops in arb_ops(40)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let repo = InMemoryBalanceRepository::default();
        let service = LedgerService::new(Arc::new(repo));

        let mut expected = Decimal::ZERO;
        for op in &ops {
            match op {
                LedgerOp::Deposit(amount) => {
                    let balance = rt.block_on(service.add_funds("user-1", *amount)).unwrap();
                    expected += *amount;
                    prop_assert_eq!(balance, expected);
                }
                LedgerOp::Withdraw(amount) => {
                    let result = rt.block_on(service.withdraw_funds("user-1", *amount));
                    if *amount <= expected {
                        expected -= *amount;
                        prop_assert_eq!(result.unwrap(), expected);
                    } else {
                        let is_insufficient =
                            matches!(result, Err(Error::InsufficientFunds { .. }));
                        prop_assert!(is_insufficient);
                        prop_assert_eq!(service.get_balance("user-1").unwrap(), expected);
                    }
                }
            }
            prop_assert!(service.get_balance("user-1").unwrap() >= Decimal::ZERO);
        }

        prop_assert_eq!(service.get_balance("user-1").unwrap(), expected);
    }

    /// Every successful mutation appends exactly one history entry whose
    /// running balance matches the fold.
    #[test]
    fn prop_history_mirrors_successful_mutations(ops in arb_ops(30)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let repo = InMemoryBalanceRepository::default();
        let service = LedgerService::new(Arc::new(repo));

        let mut succeeded = 0usize;
        let mut balance = Decimal::ZERO;
        for op in &ops {
            match op {
                LedgerOp::Deposit(amount) => {
                    rt.block_on(service.add_funds("user-1", *amount)).unwrap();
                    balance += *amount;
                    succeeded += 1;
                }
                LedgerOp::Withdraw(amount) if *amount <= balance => {
                    rt.block_on(service.withdraw_funds("user-1", *amount)).unwrap();
                    balance -= *amount;
                    succeeded += 1;
                }
                LedgerOp::Withdraw(amount) => {
                    let _ = rt.block_on(service.withdraw_funds("user-1", *amount));
                }
            }
        }

        let history = service.get_history("user-1").unwrap();
        prop_assert_eq!(history.len(), succeeded);
        if let Some(latest) = history.first() {
            prop_assert_eq!(latest.balance_after, balance);
        }
    }

    /// Operations on distinct users never interfere.
    #[test]
    fn prop_users_are_isolated(
        deposits_a in proptest::collection::vec(arb_amount(), 1..10),
        deposits_b in proptest::collection::vec(arb_amount(), 1..10),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let repo = InMemoryBalanceRepository::default();
        let service = LedgerService::new(Arc::new(repo));

        let total_a: Decimal = deposits_a.iter().copied().sum();
        let total_b: Decimal = deposits_b.iter().copied().sum();

        for amount in &deposits_a {
            rt.block_on(service.add_funds("user-a", *amount)).unwrap();
        }
        for amount in &deposits_b {
            rt.block_on(service.add_funds("user-b", *amount)).unwrap();
        }

        prop_assert_eq!(service.get_balance("user-a").unwrap(), total_a);
        prop_assert_eq!(service.get_balance("user-b").unwrap(), total_b);
    }
}
