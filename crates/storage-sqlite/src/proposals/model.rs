//! Database model for proposals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use roomly_core::proposals::{NewProposal, Proposal, ProposalStatus};

use crate::utils::{parse_decimal_tolerant, to_utc};

/// Database model for proposals
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
#[diesel(table_name = crate::schema::proposals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProposalDB {
    pub id: String,
    pub request_id: String,
    pub designer_id: String,
    pub price: String,
    pub estimated_days: i32,
    pub description: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<ProposalDB> for Proposal {
    fn from(db: ProposalDB) -> Self {
        Self {
            status: ProposalStatus::from_str(&db.status).unwrap_or_default(),
            price: parse_decimal_tolerant(&db.price, "price"),
            id: db.id,
            request_id: db.request_id,
            designer_id: db.designer_id,
            estimated_days: db.estimated_days,
            description: db.description,
            created_at: to_utc(db.created_at),
        }
    }
}

impl From<NewProposal> for ProposalDB {
    fn from(domain: NewProposal) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            request_id: domain.request_id,
            designer_id: domain.designer_id,
            price: domain.price.to_string(),
            estimated_days: domain.estimated_days,
            description: domain.description,
            status: ProposalStatus::Pending.as_str().to_string(),
            created_at: now,
        }
    }
}
