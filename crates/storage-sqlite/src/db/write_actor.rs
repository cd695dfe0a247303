//! Single-writer actor serializing all database writes.
//!
//! SQLite allows one writer at a time; funneling every write job through a
//! dedicated task with its own connection avoids lock contention and makes
//! each job - wrapped in an immediate transaction - atomic with respect to
//! every other write. This is also what serializes concurrent mutations of
//! a single balance or request.

use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use roomly_core::errors::Result;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job: runs against the actor's connection, inside a transaction.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // Jobs are type-erased to Box<dyn Any> so one channel serves every
    // return type; exec() downcasts on the way out.
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction: it either fully
    /// commits or fully rolls back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. The actor owns one connection from the pool and processes
/// write jobs serially, each inside an immediate transaction.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            // StorageError carries core errors through the transaction
            // intact, so a validation or conflict failure inside a job
            // rolls back and still reaches the caller typed.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Receiver may have been dropped (caller timed out); ignore.
            let _ = reply_tx.send(result);
        }
        // Channel closed: every WriteHandle is gone, the actor terminates.
    });

    WriteHandle { tx }
}
