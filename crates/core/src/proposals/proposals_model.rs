//! Proposal domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::requests::DesignRequest;

/// Lifecycle state of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    /// Awaiting the client's decision.
    #[default]
    Pending,
    /// Chosen by the client; work is underway.
    Accepted,
    /// Declined, directly or by a sibling's acceptance.
    Rejected,
    /// Work confirmed complete by the client.
    Completed,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "PENDING",
            ProposalStatus::Accepted => "ACCEPTED",
            ProposalStatus::Rejected => "REJECTED",
            ProposalStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for ProposalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ProposalStatus::Pending),
            "ACCEPTED" => Ok(ProposalStatus::Accepted),
            "REJECTED" => Ok(ProposalStatus::Rejected),
            "COMPLETED" => Ok(ProposalStatus::Completed),
            other => Err(format!("Unknown proposal status: {}", other)),
        }
    }
}

/// Domain model representing a designer's bid against a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub request_id: String,
    pub designer_id: String,
    pub price: Decimal,
    pub estimated_days: i32,
    pub description: String,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for submitting a new proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProposal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub request_id: String,
    pub designer_id: String,
    pub price: Decimal,
    pub estimated_days: i32,
    pub description: String,
}

impl NewProposal {
    /// Validates the intrinsic proposal data. Cross-entity rules (budget
    /// ceiling, request state, duplicates) are enforced by the service.
    pub fn validate(&self) -> Result<()> {
        if self.request_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "requestId".to_string(),
            )));
        }
        if self.designer_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "designerId".to_string(),
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
        if self.estimated_days <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Estimated time must be a positive number of days".to_string(),
            )));
        }
        Ok(())
    }
}

/// Result of a successful acceptance transaction: the updated request, the
/// accepted proposal, and every sibling swept from pending to rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acceptance {
    pub request: DesignRequest,
    pub accepted: Proposal,
    pub rejected: Vec<Proposal>,
}

/// Sorts proposals for display: creation time descending, ties broken by
/// id ascending for a deterministic order.
pub fn sort_for_display(mut proposals: Vec<Proposal>) -> Vec<Proposal> {
    proposals.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    proposals
}
