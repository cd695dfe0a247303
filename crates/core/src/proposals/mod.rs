//! Proposals module - domain models, the lifecycle service, and traits.

mod proposals_model;
mod proposals_service;
mod proposals_traits;


pub use proposals_model::{sort_for_display, Acceptance, NewProposal, Proposal, ProposalStatus};
pub use proposals_service::ProposalService;
pub use proposals_traits::{ProposalRepositoryTrait, ProposalServiceTrait};
