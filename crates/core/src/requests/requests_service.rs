use log::debug;
use std::sync::Arc;

use super::requests_model::{DesignRequest, NewDesignRequest};
use super::requests_traits::{RequestRepositoryTrait, RequestServiceTrait};
use crate::errors::Result;

/// Service for managing design requests.
pub struct RequestService {
    repository: Arc<dyn RequestRepositoryTrait>,
}

impl RequestService {
    /// Creates a new RequestService instance.
    pub fn new(repository: Arc<dyn RequestRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl RequestServiceTrait for RequestService {
    /// Creates a new design request.
    async fn create_request(&self, new_request: NewDesignRequest) -> Result<DesignRequest> {
        new_request.validate()?;
        debug!(
            "Creating request for client {}: {}",
            new_request.client_id, new_request.title
        );
        self.repository.create(new_request).await
    }

    /// Retrieves a request by its ID.
    fn get_request(&self, request_id: &str) -> Result<DesignRequest> {
        self.repository.get_by_id(request_id)
    }

    /// Lists all requests posted by a client.
    fn list_requests_for_client(&self, client_id: &str) -> Result<Vec<DesignRequest>> {
        self.repository.list_by_client(client_id)
    }

    /// Lists requests still open for proposals.
    fn list_open_requests(&self) -> Result<Vec<DesignRequest>> {
        self.repository.list_open()
    }
}
