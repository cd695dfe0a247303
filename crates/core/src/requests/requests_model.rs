//! Design request domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

/// Lifecycle state of a design request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Posted, no proposals yet.
    #[default]
    Pending,
    /// At least one pending proposal exists.
    ProposalSubmitted,
    /// A proposal was accepted; work is underway.
    InProgress,
    /// The accepted proposal was confirmed complete.
    Completed,
    /// Closed by the client without acceptance.
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::ProposalSubmitted => "PROPOSAL_SUBMITTED",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Completed => "COMPLETED",
            RequestStatus::Rejected => "REJECTED",
        }
    }

    /// Whether designers may still submit proposals against the request.
    pub fn accepts_proposals(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::ProposalSubmitted)
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(RequestStatus::Pending),
            "PROPOSAL_SUBMITTED" => Ok(RequestStatus::ProposalSubmitted),
            "IN_PROGRESS" => Ok(RequestStatus::InProgress),
            "COMPLETED" => Ok(RequestStatus::Completed),
            "REJECTED" => Ok(RequestStatus::Rejected),
            other => Err(format!("Unknown request status: {}", other)),
        }
    }
}

/// Domain model representing a client's posted design request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub description: String,
    /// Free-text room descriptor ("living room", "kitchen", ...).
    pub room_type: String,
    pub budget: Decimal,
    pub duration_days: i32,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// Optional reference image, set once at creation.
    pub reference_image_url: Option<String>,
}

/// Input model for posting a new design request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDesignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_id: String,
    pub title: String,
    pub description: String,
    pub room_type: String,
    pub budget: Decimal,
    pub duration_days: i32,
    pub reference_image_url: Option<String>,
}

impl NewDesignRequest {
    /// Validates the new request data.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "clientId".to_string(),
            )));
        }
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.budget < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget cannot be negative".to_string(),
            )));
        }
        if self.duration_days <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Duration must be a positive number of days".to_string(),
            )));
        }
        Ok(())
    }
}
