//! Balance ledger domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::MONEY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

/// A user's current balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub user_id: String,
    pub balance: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Direction of a balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEntryKind {
    Deposit,
    Withdrawal,
}

impl LedgerEntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerEntryKind::Deposit => "DEPOSIT",
            LedgerEntryKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl FromStr for LedgerEntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(LedgerEntryKind::Deposit),
            "WITHDRAWAL" => Ok(LedgerEntryKind::Withdrawal),
            other => Err(format!("Unknown ledger entry kind: {}", other)),
        }
    }
}

/// Append-only audit record, one per balance mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub user_id: String,
    pub kind: LedgerEntryKind,
    pub amount: Decimal,
    /// Balance immediately after this entry was applied.
    pub balance_after: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Validates a deposit/withdrawal amount: strictly positive, at most two
/// fractional digits (currency minor units).
pub fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Amount must be positive".to_string(),
        )));
    }
    if amount.normalize().scale() > MONEY_DECIMAL_PRECISION {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Amount {} has more than {} decimal places",
            amount, MONEY_DECIMAL_PRECISION
        ))));
    }
    Ok(())
}
