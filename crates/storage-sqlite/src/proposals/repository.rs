use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use roomly_core::errors::{Error, Result, ValidationError};
use roomly_core::proposals::{
    Acceptance, NewProposal, Proposal, ProposalRepositoryTrait, ProposalStatus,
};
use roomly_core::requests::{DesignRequest, RequestStatus};

use super::model::ProposalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::requests::DesignRequestDB;
use crate::schema::{design_requests, proposals};

/// Repository for managing proposal data in the database.
///
/// Every lifecycle transition runs as one job on the writer actor, inside
/// an immediate transaction; status predicates on the UPDATE statements are
/// the compare-and-swap guards against concurrent transitions.
pub struct ProposalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProposalRepository {
    /// Creates a new ProposalRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn load_proposal(conn: &mut SqliteConnection, proposal_id: &str) -> Result<ProposalDB> {
    proposals::table
        .select(ProposalDB::as_select())
        .find(proposal_id)
        .first::<ProposalDB>(conn)
        .optional()
        .map_err(StorageError::from)?
        .ok_or_else(|| Error::NotFound(format!("Proposal {} not found", proposal_id)))
}

fn load_request(conn: &mut SqliteConnection, request_id: &str) -> Result<DesignRequestDB> {
    design_requests::table
        .select(DesignRequestDB::as_select())
        .find(request_id)
        .first::<DesignRequestDB>(conn)
        .optional()
        .map_err(StorageError::from)?
        .ok_or_else(|| Error::NotFound(format!("Request {} not found", request_id)))
}

#[async_trait]
impl ProposalRepositoryTrait for ProposalRepository {
    async fn create(&self, new_proposal: NewProposal) -> Result<Proposal> {
        new_proposal.validate()?;

        self.writer
            .exec(move |conn| {
                // The service validated against a snapshot; re-check the
                // request state inside the transaction in case a
                // concurrent acceptance closed it.
                let request_db = load_request(conn, &new_proposal.request_id)?;
                let request_status =
                    RequestStatus::from_str(&request_db.status).map_err(Error::Unexpected)?;
                if !request_status.accepts_proposals() {
                    return Err(Error::Conflict(format!(
                        "Request {} is no longer open for proposals",
                        request_db.id
                    )));
                }

                let mut proposal_db: ProposalDB = new_proposal.into();
                if proposal_db.id.is_empty() {
                    proposal_db.id = Uuid::new_v4().to_string();
                }

                diesel::insert_into(proposals::table)
                    .values(&proposal_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if request_status == RequestStatus::Pending {
                    diesel::update(
                        design_requests::table
                            .find(&proposal_db.request_id)
                            .filter(design_requests::status.eq(RequestStatus::Pending.as_str())),
                    )
                    .set(design_requests::status.eq(RequestStatus::ProposalSubmitted.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                }

                Ok(proposal_db.into())
            })
            .await
    }

    fn get_by_id(&self, proposal_id: &str) -> Result<Proposal> {
        let mut conn = get_connection(&self.pool)?;
        Ok(load_proposal(&mut conn, proposal_id)?.into())
    }

    fn list_by_request(&self, request_id: &str) -> Result<Vec<Proposal>> {
        let mut conn = get_connection(&self.pool)?;

        let results = proposals::table
            .filter(proposals::request_id.eq(request_id))
            .select(ProposalDB::as_select())
            .order((proposals::created_at.desc(), proposals::id.asc()))
            .load::<ProposalDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Proposal::from).collect())
    }

    fn find_by_request_and_designer(
        &self,
        request_id: &str,
        designer_id: &str,
    ) -> Result<Option<Proposal>> {
        let mut conn = get_connection(&self.pool)?;

        let result = proposals::table
            .filter(proposals::request_id.eq(request_id))
            .filter(proposals::designer_id.eq(designer_id))
            .select(ProposalDB::as_select())
            .first::<ProposalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(Proposal::from))
    }

    async fn accept(&self, proposal_id: &str) -> Result<Acceptance> {
        let proposal_id_owned = proposal_id.to_string();

        self.writer
            .exec(move |conn| {
                let proposal_db = load_proposal(conn, &proposal_id_owned)?;
                if proposal_db.status != ProposalStatus::Pending.as_str() {
                    return Err(Error::Conflict(format!(
                        "Proposal {} is no longer pending",
                        proposal_id_owned
                    )));
                }

                // Snapshot the pending siblings before the sweep so their
                // designers can be notified after commit.
                let siblings = proposals::table
                    .filter(proposals::request_id.eq(&proposal_db.request_id))
                    .filter(proposals::id.ne(&proposal_db.id))
                    .filter(proposals::status.eq(ProposalStatus::Pending.as_str()))
                    .select(ProposalDB::as_select())
                    .load::<ProposalDB>(conn)
                    .map_err(StorageError::from)?;

                // Compare-and-swap on the request; zero rows means a
                // concurrent acceptance already won.
                let request_rows = diesel::update(
                    design_requests::table
                        .find(&proposal_db.request_id)
                        .filter(
                            design_requests::status
                                .eq(RequestStatus::ProposalSubmitted.as_str()),
                        ),
                )
                .set(design_requests::status.eq(RequestStatus::InProgress.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;
                if request_rows == 0 {
                    return Err(Error::Conflict(format!(
                        "Request {} is not awaiting a decision",
                        proposal_db.request_id
                    )));
                }

                diesel::update(
                    proposals::table
                        .find(&proposal_db.id)
                        .filter(proposals::status.eq(ProposalStatus::Pending.as_str())),
                )
                .set(proposals::status.eq(ProposalStatus::Accepted.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;

                diesel::update(
                    proposals::table
                        .filter(proposals::request_id.eq(&proposal_db.request_id))
                        .filter(proposals::id.ne(&proposal_db.id))
                        .filter(proposals::status.eq(ProposalStatus::Pending.as_str())),
                )
                .set(proposals::status.eq(ProposalStatus::Rejected.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;

                let request_db = load_request(conn, &proposal_db.request_id)?;
                let accepted_db = load_proposal(conn, &proposal_db.id)?;
                let rejected = siblings
                    .into_iter()
                    .map(|mut sibling| {
                        sibling.status = ProposalStatus::Rejected.as_str().to_string();
                        Proposal::from(sibling)
                    })
                    .collect();

                Ok(Acceptance {
                    request: request_db.into(),
                    accepted: accepted_db.into(),
                    rejected,
                })
            })
            .await
    }

    async fn reject(&self, proposal_id: &str) -> Result<(Proposal, DesignRequest)> {
        let proposal_id_owned = proposal_id.to_string();

        self.writer
            .exec(move |conn| {
                let proposal_db = load_proposal(conn, &proposal_id_owned)?;

                let rows = diesel::update(
                    proposals::table
                        .find(&proposal_db.id)
                        .filter(proposals::status.eq(ProposalStatus::Pending.as_str())),
                )
                .set(proposals::status.eq(ProposalStatus::Rejected.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;
                if rows == 0 {
                    return Err(Error::Conflict(format!(
                        "Proposal {} is no longer pending",
                        proposal_id_owned
                    )));
                }

                // When the last pending proposal goes, reopen the request
                // so new proposals can come in.
                let remaining_pending: i64 = proposals::table
                    .filter(proposals::request_id.eq(&proposal_db.request_id))
                    .filter(proposals::status.eq(ProposalStatus::Pending.as_str()))
                    .count()
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                if remaining_pending == 0 {
                    diesel::update(
                        design_requests::table
                            .find(&proposal_db.request_id)
                            .filter(
                                design_requests::status
                                    .eq(RequestStatus::ProposalSubmitted.as_str()),
                            ),
                    )
                    .set(design_requests::status.eq(RequestStatus::Pending.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                }

                let proposal = load_proposal(conn, &proposal_db.id)?.into();
                let request = load_request(conn, &proposal_db.request_id)?.into();
                Ok((proposal, request))
            })
            .await
    }

    async fn complete(&self, proposal_id: &str) -> Result<(Proposal, DesignRequest)> {
        let proposal_id_owned = proposal_id.to_string();

        self.writer
            .exec(move |conn| {
                let proposal_db = load_proposal(conn, &proposal_id_owned)?;
                if proposal_db.status != ProposalStatus::Accepted.as_str() {
                    return Err(Error::Validation(ValidationError::InvalidInput(format!(
                        "Proposal {} has not been accepted",
                        proposal_id_owned
                    ))));
                }

                let rows = diesel::update(
                    proposals::table
                        .find(&proposal_db.id)
                        .filter(proposals::status.eq(ProposalStatus::Accepted.as_str())),
                )
                .set(proposals::status.eq(ProposalStatus::Completed.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;
                if rows == 0 {
                    return Err(Error::Conflict(format!(
                        "Proposal {} is no longer accepted",
                        proposal_id_owned
                    )));
                }

                let request_rows = diesel::update(
                    design_requests::table
                        .find(&proposal_db.request_id)
                        .filter(design_requests::status.eq(RequestStatus::InProgress.as_str())),
                )
                .set(design_requests::status.eq(RequestStatus::Completed.as_str()))
                .execute(conn)
                .map_err(StorageError::from)?;
                if request_rows == 0 {
                    return Err(Error::Conflict(format!(
                        "Request {} is not in progress",
                        proposal_db.request_id
                    )));
                }

                let proposal = load_proposal(conn, &proposal_db.id)?.into();
                let request = load_request(conn, &proposal_db.request_id)?.into();
                Ok((proposal, request))
            })
            .await
    }
}
