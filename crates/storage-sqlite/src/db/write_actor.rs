use diesel::SqliteConnection;
use log::debug;
use tokio::sync::{mpsc, oneshot};

use super::{get_connection, DbPool};
use crate::errors::StorageError;
use freightquote_core::errors::{DatabaseError, Error, Result};

/// Capacity of the job queue in front of the writer
const WRITE_QUEUE_CAPACITY: usize = 1024;

// A job runs once on the writer's connection and replies on its own channel.
type Job = Box<dyn FnOnce(&mut SqliteConnection) + Send + 'static>;

/// Handle for sending write jobs to the single writer task.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Job>,
}

impl WriteHandle {
    /// Runs `job` inside an immediate transaction on the writer's dedicated
    /// connection and waits for its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel::<Result<T>>();
        let wrapped: Job = Box::new(move |conn| {
            let result = conn
                .immediate_transaction::<T, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);
            // The caller may have given up waiting
            let _ = reply_tx.send(result);
        });

        self.tx.send(wrapped).await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "database writer has stopped".to_string(),
            ))
        })?;

        reply_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "database writer dropped the job without replying".to_string(),
            ))
        })?
    }
}

/// Spawns the task that owns one pooled connection and applies write jobs
/// serially. The task ends when every [`WriteHandle`] is dropped.
pub fn spawn_writer(pool: &DbPool) -> Result<WriteHandle> {
    let mut conn = get_connection(pool)?;
    let (tx, mut rx) = mpsc::channel::<Job>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            job(&mut *conn);
        }
        debug!("Database writer stopped");
    });

    Ok(WriteHandle { tx })
}
