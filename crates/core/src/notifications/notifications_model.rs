//! Notification event types.

use serde::{Deserialize, Serialize};

/// Kinds of notifications emitted by the lifecycle services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// A designer submitted a proposal against the client's request.
    ProposalReceived,
    /// The client accepted the designer's proposal.
    ProposalAccepted,
    /// The designer's proposal was rejected (directly or by a sibling's
    /// acceptance).
    ProposalRejected,
    /// The accepted proposal was confirmed as completed.
    ProposalCompleted,
    /// The client's request reached the completed state.
    RequestCompleted,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ProposalReceived => "PROPOSAL_RECEIVED",
            NotificationKind::ProposalAccepted => "PROPOSAL_ACCEPTED",
            NotificationKind::ProposalRejected => "PROPOSAL_REJECTED",
            NotificationKind::ProposalCompleted => "PROPOSAL_COMPLETED",
            NotificationKind::RequestCompleted => "REQUEST_COMPLETED",
        }
    }
}

/// Notification emitted by core services after a committed state change.
///
/// Carries structured facts only; the delivery layer owns rendering them
/// into user-facing text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Recipient user id (client or designer).
    pub user_id: String,
    pub kind: NotificationKind,
    pub request_id: String,
    pub proposal_id: Option<String>,
}

impl Notification {
    /// Creates a ProposalReceived notification for the request's client.
    pub fn proposal_received(client_id: &str, request_id: &str, proposal_id: &str) -> Self {
        Self {
            user_id: client_id.to_string(),
            kind: NotificationKind::ProposalReceived,
            request_id: request_id.to_string(),
            proposal_id: Some(proposal_id.to_string()),
        }
    }

    /// Creates a ProposalAccepted notification for the winning designer.
    pub fn proposal_accepted(designer_id: &str, request_id: &str, proposal_id: &str) -> Self {
        Self {
            user_id: designer_id.to_string(),
            kind: NotificationKind::ProposalAccepted,
            request_id: request_id.to_string(),
            proposal_id: Some(proposal_id.to_string()),
        }
    }

    /// Creates a ProposalRejected notification for the affected designer.
    pub fn proposal_rejected(designer_id: &str, request_id: &str, proposal_id: &str) -> Self {
        Self {
            user_id: designer_id.to_string(),
            kind: NotificationKind::ProposalRejected,
            request_id: request_id.to_string(),
            proposal_id: Some(proposal_id.to_string()),
        }
    }

    /// Creates a ProposalCompleted notification for the designer.
    pub fn proposal_completed(designer_id: &str, request_id: &str, proposal_id: &str) -> Self {
        Self {
            user_id: designer_id.to_string(),
            kind: NotificationKind::ProposalCompleted,
            request_id: request_id.to_string(),
            proposal_id: Some(proposal_id.to_string()),
        }
    }

    /// Creates a RequestCompleted notification for the client.
    pub fn request_completed(client_id: &str, request_id: &str) -> Self {
        Self {
            user_id: client_id.to_string(),
            kind: NotificationKind::RequestCompleted,
            request_id: request_id.to_string(),
            proposal_id: None,
        }
    }
}
