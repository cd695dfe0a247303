use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use roomly_core::errors::{Error, Result};
use roomly_core::ledger::{AccountBalance, BalanceRepositoryTrait, LedgerEntry, LedgerEntryKind};

use super::model::{BalanceDB, LedgerEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{balances, ledger_entries};
use crate::utils::parse_decimal_tolerant;

/// Repository for managing balance data in the database.
///
/// Accounts materialize on first mutation; reads treat a missing row as a
/// zero balance. Every mutation - the balance upsert plus its audit entry -
/// is one job on the writer actor, so concurrent deposits and withdrawals
/// for the same user serialize without lost updates.
pub struct BalanceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BalanceRepository {
    /// Creates a new BalanceRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn stored_balance(conn: &mut SqliteConnection, user_id: &str) -> Result<Decimal> {
    let row = balances::table
        .select(BalanceDB::as_select())
        .find(user_id)
        .first::<BalanceDB>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(row
        .map(|b| parse_decimal_tolerant(&b.balance, "balance"))
        .unwrap_or(Decimal::ZERO))
}

fn apply_mutation(
    conn: &mut SqliteConnection,
    user_id: &str,
    kind: LedgerEntryKind,
    amount: Decimal,
    new_balance: Decimal,
) -> Result<AccountBalance> {
    let now = Utc::now().naive_utc();

    let balance_db = BalanceDB {
        user_id: user_id.to_string(),
        balance: new_balance.to_string(),
        updated_at: now,
    };
    diesel::insert_into(balances::table)
        .values(&balance_db)
        .on_conflict(balances::user_id)
        .do_update()
        .set((
            balances::balance.eq(new_balance.to_string()),
            balances::updated_at.eq(now),
        ))
        .execute(conn)
        .map_err(StorageError::from)?;

    let entry_db = LedgerEntryDB {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        kind: kind.as_str().to_string(),
        amount: amount.to_string(),
        balance_after: new_balance.to_string(),
        created_at: now,
    };
    diesel::insert_into(ledger_entries::table)
        .values(&entry_db)
        .execute(conn)
        .map_err(StorageError::from)?;

    Ok(balance_db.into())
}

#[async_trait]
impl BalanceRepositoryTrait for BalanceRepository {
    fn get_balance(&self, user_id: &str) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        stored_balance(&mut conn, user_id)
    }

    async fn deposit(&self, user_id: &str, amount: Decimal) -> Result<AccountBalance> {
        let user_id_owned = user_id.to_string();

        self.writer
            .exec(move |conn| {
                let current = stored_balance(conn, &user_id_owned)?;
                apply_mutation(
                    conn,
                    &user_id_owned,
                    LedgerEntryKind::Deposit,
                    amount,
                    current + amount,
                )
            })
            .await
    }

    async fn withdraw(&self, user_id: &str, amount: Decimal) -> Result<AccountBalance> {
        let user_id_owned = user_id.to_string();

        self.writer
            .exec(move |conn| {
                let current = stored_balance(conn, &user_id_owned)?;
                if amount > current {
                    return Err(Error::InsufficientFunds {
                        requested: amount,
                        available: current,
                    });
                }
                apply_mutation(
                    conn,
                    &user_id_owned,
                    LedgerEntryKind::Withdrawal,
                    amount,
                    current - amount,
                )
            })
            .await
    }

    fn list_entries(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let results = ledger_entries::table
            .filter(ledger_entries::user_id.eq(user_id))
            .select(LedgerEntryDB::as_select())
            .order((ledger_entries::created_at.desc(), ledger_entries::id.asc()))
            .load::<LedgerEntryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(LedgerEntry::from).collect())
    }
}
