//! Request repository and service traits.
//!
//! These traits define the contract for design-request operations without
//! any database-specific types, allowing for different storage
//! implementations.

use async_trait::async_trait;

use super::requests_model::{DesignRequest, NewDesignRequest};
use crate::errors::Result;

/// Trait defining the contract for DesignRequest repository operations.
///
/// Implementations handle persistence. Writes are atomic per call; the
/// storage layer owns transaction management.
#[async_trait]
pub trait RequestRepositoryTrait: Send + Sync {
    /// Creates a new request with status `Pending`.
    async fn create(&self, new_request: NewDesignRequest) -> Result<DesignRequest>;

    /// Retrieves a request by its ID.
    fn get_by_id(&self, request_id: &str) -> Result<DesignRequest>;

    /// Lists a client's requests, newest first.
    fn list_by_client(&self, client_id: &str) -> Result<Vec<DesignRequest>>;

    /// Lists requests still open for proposals, newest first.
    fn list_open(&self) -> Result<Vec<DesignRequest>>;
}

/// Trait defining the contract for request service operations.
#[async_trait]
pub trait RequestServiceTrait: Send + Sync {
    /// Creates a new request with business validation.
    async fn create_request(&self, new_request: NewDesignRequest) -> Result<DesignRequest>;

    /// Retrieves a request by ID.
    fn get_request(&self, request_id: &str) -> Result<DesignRequest>;

    /// Lists a client's requests.
    fn list_requests_for_client(&self, client_id: &str) -> Result<Vec<DesignRequest>>;

    /// Lists requests open for proposals.
    fn list_open_requests(&self) -> Result<Vec<DesignRequest>>;
}
