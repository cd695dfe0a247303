#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::ledger::{
        AccountBalance, BalanceRepositoryTrait, LedgerEntry, LedgerEntryKind, LedgerService,
        LedgerServiceTrait,
    };
    use crate::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockBalanceRepository {
        balances: Arc<Mutex<HashMap<String, Decimal>>>,
        entries: Arc<Mutex<Vec<LedgerEntry>>>,
    }

    impl MockBalanceRepository {
        fn record(&self, user_id: &str, kind: LedgerEntryKind, amount: Decimal, after: Decimal) {
            let mut entries = self.entries.lock().unwrap();
            let id = format!("entry-{:03}", entries.len() + 1);
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

    #[async_trait]
    impl BalanceRepositoryTrait for MockBalanceRepository {
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
            self.record(user_id, LedgerEntryKind::Deposit, amount, after);
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
            self.record(user_id, LedgerEntryKind::Withdrawal, amount, after);
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

    fn service() -> (LedgerService, MockBalanceRepository) {
        let repo = MockBalanceRepository::default();
        (LedgerService::new(Arc::new(repo.clone())), repo)
    }

    #[tokio::test]
    async fn test_untouched_account_has_zero_balance() {
        let (service, _) = service();
        assert_eq!(service.get_balance("user-1").unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_deposit_then_withdraw_nets_out() {
        let (service, _) = service();
        assert_eq!(service.add_funds("user-1", dec!(30)).await.unwrap(), dec!(30));
        assert_eq!(
            service.withdraw_funds("user-1", dec!(10)).await.unwrap(),
            dec!(20)
        );
        assert_eq!(service.get_balance("user-1").unwrap(), dec!(20));
    }

    #[tokio::test]
    async fn test_non_positive_amounts_fail_validation() {
        let (service, repo) = service();
        assert!(matches!(
            service.add_funds("user-1", Decimal::ZERO).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.add_funds("user-1", dec!(-5)).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.withdraw_funds("user-1", dec!(-1)).await,
            Err(Error::Validation(_))
        ));
        assert!(repo.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sub_cent_amount_fails_validation() {
        let (service, _) = service();
        assert!(matches!(
            service.add_funds("user-1", dec!(0.005)).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_overdraft_fails_and_leaves_balance_unchanged() {
        let (service, _) = service();
        service.add_funds("user-1", dec!(25)).await.unwrap();

        let result = service.withdraw_funds("user-1", dec!(25.01)).await;
        match result {
            Err(Error::InsufficientFunds {
                requested,
                available,
            }) => {
                assert_eq!(requested, dec!(25.01));
                assert_eq!(available, dec!(25));
            }
            other => panic!("Expected InsufficientFunds, got {:?}", other),
        }
        assert_eq!(service.get_balance("user-1").unwrap(), dec!(25));
    }

    #[tokio::test]
    async fn test_zero_balance_withdrawal_then_exact_drain() {
        let (service, _) = service();

        assert!(matches!(
            service.withdraw_funds("user-1", dec!(10)).await,
            Err(Error::InsufficientFunds { .. })
        ));
        assert_eq!(service.get_balance("user-1").unwrap(), Decimal::ZERO);

        service.add_funds("user-1", dec!(50)).await.unwrap();
        assert_eq!(
            service.withdraw_funds("user-1", dec!(50)).await.unwrap(),
            Decimal::ZERO
        );
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let (service, _) = service();
        service.add_funds("user-1", dec!(40)).await.unwrap();
        service.add_funds("user-2", dec!(7.50)).await.unwrap();

        assert_eq!(service.get_balance("user-1").unwrap(), dec!(40));
        assert_eq!(service.get_balance("user-2").unwrap(), dec!(7.50));
    }

    #[tokio::test]
    async fn test_history_records_every_mutation_newest_first() {
        let (service, _) = service();
        service.add_funds("user-1", dec!(30)).await.unwrap();
        service.withdraw_funds("user-1", dec!(10)).await.unwrap();
        service.add_funds("user-2", dec!(5)).await.unwrap();

        let history = service.get_history("user-1").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, LedgerEntryKind::Withdrawal);
        assert_eq!(history[0].balance_after, dec!(20));
        assert_eq!(history[1].kind, LedgerEntryKind::Deposit);
        assert_eq!(history[1].balance_after, dec!(30));
    }
}
