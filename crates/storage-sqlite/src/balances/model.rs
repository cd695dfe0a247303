//! Database models for balances and ledger entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use roomly_core::ledger::{AccountBalance, LedgerEntry, LedgerEntryKind};

use crate::utils::{parse_decimal_tolerant, to_utc};

/// Database model for per-user balances
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::balances)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BalanceDB {
    pub user_id: String,
    pub balance: String,
    pub updated_at: NaiveDateTime,
}

impl From<BalanceDB> for AccountBalance {
    fn from(db: BalanceDB) -> Self {
        Self {
            balance: parse_decimal_tolerant(&db.balance, "balance"),
            user_id: db.user_id,
            updated_at: to_utc(db.updated_at),
        }
    }
}

/// Database model for ledger entries
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::ledger_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LedgerEntryDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub amount: String,
    pub balance_after: String,
    pub created_at: NaiveDateTime,
}

impl From<LedgerEntryDB> for LedgerEntry {
    fn from(db: LedgerEntryDB) -> Self {
        Self {
            kind: LedgerEntryKind::from_str(&db.kind).unwrap_or(LedgerEntryKind::Deposit),
            amount: parse_decimal_tolerant(&db.amount, "amount"),
            balance_after: parse_decimal_tolerant(&db.balance_after, "balance_after"),
            id: db.id,
            user_id: db.user_id,
            created_at: to_utc(db.created_at),
        }
    }
}
