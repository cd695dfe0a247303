//! Proposal repository and service traits.
//!
//! These traits define the contract for the proposal lifecycle without any
//! database-specific types. Every multi-entity transition (submit, accept,
//! reject, complete) is a single repository call so the storage layer can
//! commit it in one transaction; status predicates inside those
//! transactions act as compare-and-swap guards, and a lost race surfaces
//! as `Error::Conflict`.

use async_trait::async_trait;

use super::proposals_model::{Acceptance, NewProposal, Proposal};
use crate::errors::Result;
use crate::requests::DesignRequest;

/// Trait defining the contract for Proposal repository operations.
#[async_trait]
pub trait ProposalRepositoryTrait: Send + Sync {
    /// Inserts a pending proposal and, if the request is still `Pending`,
    /// advances it to `ProposalSubmitted` - both in one transaction. A
    /// duplicate (request, designer) pair surfaces as a unique violation.
    async fn create(&self, new_proposal: NewProposal) -> Result<Proposal>;

    /// Retrieves a proposal by its ID.
    fn get_by_id(&self, proposal_id: &str) -> Result<Proposal>;

    /// Lists every proposal under a request, newest first (ties by id).
    fn list_by_request(&self, request_id: &str) -> Result<Vec<Proposal>>;

    /// Duplicate-submission lookup for a (request, designer) pair.
    fn find_by_request_and_designer(
        &self,
        request_id: &str,
        designer_id: &str,
    ) -> Result<Option<Proposal>>;

    /// Accepts a proposal in one transaction: proposal `Pending` ->
    /// `Accepted`, request `ProposalSubmitted` -> `InProgress`, and every
    /// pending sibling -> `Rejected`. No partial state is ever visible.
    async fn accept(&self, proposal_id: &str) -> Result<Acceptance>;

    /// Rejects a pending proposal. When it was the request's last pending
    /// proposal and none has been accepted, the request reverts to
    /// `Pending` in the same transaction.
    async fn reject(&self, proposal_id: &str) -> Result<(Proposal, DesignRequest)>;

    /// Completes an accepted proposal: proposal `Accepted` -> `Completed`
    /// and request `InProgress` -> `Completed` in one transaction.
    async fn complete(&self, proposal_id: &str) -> Result<(Proposal, DesignRequest)>;
}

/// Trait defining the contract for the proposal lifecycle service.
///
/// This is the caller-facing surface: validation happens here, state
/// transitions commit through the repository, and notifications go out
/// after commit.
#[async_trait]
pub trait ProposalServiceTrait: Send + Sync {
    /// Submits a proposal against an open request.
    async fn submit_proposal(&self, new_proposal: NewProposal) -> Result<Proposal>;

    /// Accepts a proposal on behalf of the request's client.
    async fn accept_proposal(&self, proposal_id: &str) -> Result<Acceptance>;

    /// Rejects a single pending proposal.
    async fn reject_proposal(&self, proposal_id: &str) -> Result<Proposal>;

    /// Confirms completion of the accepted proposal.
    async fn mark_completed(&self, proposal_id: &str) -> Result<Proposal>;

    /// Lists proposals for a request, newest first (ties by id ascending).
    fn list_proposals_for_request(&self, request_id: &str) -> Result<Vec<Proposal>>;
}
