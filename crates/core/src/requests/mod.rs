//! Requests module - domain models, services, and traits.

mod requests_model;
mod requests_service;
mod requests_traits;


pub use requests_model::{DesignRequest, NewDesignRequest, RequestStatus};
pub use requests_service::RequestService;
pub use requests_traits::{RequestRepositoryTrait, RequestServiceTrait};
