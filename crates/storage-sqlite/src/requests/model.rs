//! Database model for design requests.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use roomly_core::requests::{DesignRequest, NewDesignRequest, RequestStatus};

use crate::utils::{parse_decimal_tolerant, to_utc};

/// Database model for design requests
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
#[diesel(table_name = crate::schema::design_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DesignRequestDB {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub description: String,
    pub room_type: String,
    pub budget: String,
    pub duration_days: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub reference_image_url: Option<String>,
}

impl From<DesignRequestDB> for DesignRequest {
    fn from(db: DesignRequestDB) -> Self {
        Self {
            status: RequestStatus::from_str(&db.status).unwrap_or_default(),
            budget: parse_decimal_tolerant(&db.budget, "budget"),
            id: db.id,
            client_id: db.client_id,
            title: db.title,
            description: db.description,
            room_type: db.room_type,
            duration_days: db.duration_days,
            created_at: to_utc(db.created_at),
            reference_image_url: db.reference_image_url,
        }
    }
}

impl From<NewDesignRequest> for DesignRequestDB {
    fn from(domain: NewDesignRequest) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            client_id: domain.client_id,
            title: domain.title,
            description: domain.description,
            room_type: domain.room_type,
            budget: domain.budget.to_string(),
            duration_days: domain.duration_days,
            status: RequestStatus::Pending.as_str().to_string(),
            created_at: now,
            reference_image_url: domain.reference_image_url,
        }
    }
}
