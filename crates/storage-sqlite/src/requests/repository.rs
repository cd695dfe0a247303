use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use roomly_core::errors::{Error, Result};
use roomly_core::requests::{
    DesignRequest, NewDesignRequest, RequestRepositoryTrait, RequestStatus,
};

use super::model::DesignRequestDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::design_requests;
use crate::schema::design_requests::dsl::*;

/// Repository for managing design request data in the database
pub struct RequestRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RequestRepository {
    /// Creates a new RequestRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl RequestRepositoryTrait for RequestRepository {
    async fn create(&self, new_request: NewDesignRequest) -> Result<DesignRequest> {
        new_request.validate()?;

        self.writer
            .exec(move |conn| {
                let mut request_db: DesignRequestDB = new_request.into();
                if request_db.id.is_empty() {
                    request_db.id = Uuid::new_v4().to_string();
                }

                diesel::insert_into(design_requests::table)
                    .values(&request_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(request_db.into())
            })
            .await
    }

    fn get_by_id(&self, request_id: &str) -> Result<DesignRequest> {
        let mut conn = get_connection(&self.pool)?;

        let request = design_requests
            .select(DesignRequestDB::as_select())
            .find(request_id)
            .first::<DesignRequestDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound(format!("Request {} not found", request_id)))?;

        Ok(request.into())
    }

    fn list_by_client(&self, client_id_param: &str) -> Result<Vec<DesignRequest>> {
        let mut conn = get_connection(&self.pool)?;

        let results = design_requests
            .filter(client_id.eq(client_id_param))
            .select(DesignRequestDB::as_select())
            .order((created_at.desc(), id.asc()))
            .load::<DesignRequestDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(DesignRequest::from).collect())
    }

    fn list_open(&self) -> Result<Vec<DesignRequest>> {
        let mut conn = get_connection(&self.pool)?;

        let open_statuses = [
            RequestStatus::Pending.as_str(),
            RequestStatus::ProposalSubmitted.as_str(),
        ];
        let results = design_requests
            .filter(status.eq_any(open_statuses))
            .select(DesignRequestDB::as_select())
            .order((created_at.desc(), id.asc()))
            .load::<DesignRequestDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(DesignRequest::from).collect())
    }
}
