use log::debug;
use std::sync::Arc;

use super::proposals_model::{sort_for_display, Acceptance, NewProposal, Proposal};
use super::proposals_traits::{ProposalRepositoryTrait, ProposalServiceTrait};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::notifications::{Notification, NotificationSink};
use crate::requests::RequestRepositoryTrait;

/// Service enforcing the request/proposal lifecycle.
///
/// Validation failures report synchronously and mutate nothing. State
/// transitions commit atomically through the repository; notifications are
/// emitted only after a successful commit and are best-effort.
pub struct ProposalService {
    proposal_repository: Arc<dyn ProposalRepositoryTrait>,
    request_repository: Arc<dyn RequestRepositoryTrait>,
    notifier: Arc<dyn NotificationSink>,
}

impl ProposalService {
    /// Creates a new ProposalService instance with injected dependencies.
    pub fn new(
        proposal_repository: Arc<dyn ProposalRepositoryTrait>,
        request_repository: Arc<dyn RequestRepositoryTrait>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            proposal_repository,
            request_repository,
            notifier,
        }
    }
}

#[async_trait::async_trait]
impl ProposalServiceTrait for ProposalService {
    async fn submit_proposal(&self, new_proposal: NewProposal) -> Result<Proposal> {
        new_proposal.validate()?;

        let request = self.request_repository.get_by_id(&new_proposal.request_id)?;

        if !request.status.accepts_proposals() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Request {} is not open for proposals (status {})",
                request.id,
                request.status.as_str()
            ))));
        }
        if new_proposal.price > request.budget {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Price {} exceeds the request budget {}",
                new_proposal.price, request.budget
            ))));
        }
        if self
            .proposal_repository
            .find_by_request_and_designer(&request.id, &new_proposal.designer_id)?
            .is_some()
        {
            return Err(Error::Conflict(format!(
                "Designer {} already submitted a proposal for request {}",
                new_proposal.designer_id, request.id
            )));
        }

        debug!(
            "Submitting proposal for request {} by designer {}",
            request.id, new_proposal.designer_id
        );

        // The unique index backstops the duplicate check under concurrency.
        let proposal = match self.proposal_repository.create(new_proposal).await {
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                return Err(Error::Conflict(format!(
                    "A proposal for request {} by this designer already exists",
                    request.id
                )))
            }
            other => other?,
        };

        self.notifier.notify(Notification::proposal_received(
            &request.client_id,
            &proposal.request_id,
            &proposal.id,
        ));

        Ok(proposal)
    }

    async fn accept_proposal(&self, proposal_id: &str) -> Result<Acceptance> {
        let acceptance = self.proposal_repository.accept(proposal_id).await?;

        debug!(
            "Accepted proposal {} for request {}; {} sibling(s) rejected",
            acceptance.accepted.id,
            acceptance.request.id,
            acceptance.rejected.len()
        );

        let mut notifications = vec![Notification::proposal_accepted(
            &acceptance.accepted.designer_id,
            &acceptance.request.id,
            &acceptance.accepted.id,
        )];
        for rejected in &acceptance.rejected {
            notifications.push(Notification::proposal_rejected(
                &rejected.designer_id,
                &acceptance.request.id,
                &rejected.id,
            ));
        }
        self.notifier.notify_all(notifications);

        Ok(acceptance)
    }

    async fn reject_proposal(&self, proposal_id: &str) -> Result<Proposal> {
        let (proposal, request) = self.proposal_repository.reject(proposal_id).await?;

        debug!(
            "Rejected proposal {} for request {} (request now {})",
            proposal.id,
            request.id,
            request.status.as_str()
        );

        self.notifier.notify(Notification::proposal_rejected(
            &proposal.designer_id,
            &request.id,
            &proposal.id,
        ));

        Ok(proposal)
    }

    async fn mark_completed(&self, proposal_id: &str) -> Result<Proposal> {
        let (proposal, request) = self.proposal_repository.complete(proposal_id).await?;

        debug!(
            "Completed proposal {} for request {}",
            proposal.id, request.id
        );

        self.notifier.notify_all(vec![
            Notification::proposal_completed(&proposal.designer_id, &request.id, &proposal.id),
            Notification::request_completed(&request.client_id, &request.id),
        ]);

        Ok(proposal)
    }

    fn list_proposals_for_request(&self, request_id: &str) -> Result<Vec<Proposal>> {
        let proposals = self.proposal_repository.list_by_request(request_id)?;
        Ok(sort_for_display(proposals))
    }
}
