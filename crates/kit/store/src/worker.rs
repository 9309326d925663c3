//! Async reporting channel in front of the store.
//!
//! Failure sites hold a clonable [`ErrorReporter`]; a single worker task
//! drains the bounded channel into [`ErrorStore::observe`]. The worker ends
//! when every reporter is dropped and hands the store back so callers can
//! inspect what was surfaced.
use kit_core::NormalizedError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::store::{ActionSink, ErrorStore};

/// Errors raised when handing an error to the worker.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The worker is gone; the rejected error is returned to the caller.
    #[error("error store worker is no longer running")]
    Closed(NormalizedError),
    /// The bounded channel is full (try_report only).
    #[error("error reporting channel is full")]
    Full(NormalizedError),
}

/// Clonable handle for sending normalized errors to the store worker.
#[derive(Clone, Debug)]
pub struct ErrorReporter {
    tx: mpsc::Sender<NormalizedError>,
}

impl ErrorReporter {
    /// Sends an error, waiting while the channel is full.
    pub async fn report(&self, err: NormalizedError) -> Result<(), ReportError> {
        self.tx
            .send(err)
            .await
            .map_err(|rejected| ReportError::Closed(rejected.0))
    }

    /// Sends an error without waiting.
    pub fn try_report(&self, err: NormalizedError) -> Result<(), ReportError> {
        self.tx.try_send(err).map_err(|rejected| match rejected {
            mpsc::error::TrySendError::Full(err) => ReportError::Full(err),
            mpsc::error::TrySendError::Closed(err) => ReportError::Closed(err),
        })
    }
}

/// Spawns the worker draining reported errors into `store`.
///
/// `buffer` is clamped to at least 1. The returned handle resolves with the
/// store once the last reporter is dropped.
pub fn spawn_error_worker<S>(
    store: ErrorStore<S>,
    buffer: usize,
) -> (ErrorReporter, JoinHandle<ErrorStore<S>>)
where
    S: ActionSink + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel(buffer.max(1));
    let handle = tokio::spawn(async move {
        let mut store = store;
        while let Some(err) = rx.recv().await {
            store.observe(err);
        }
        debug!("error reporters dropped, store worker stopping");
        store
    });
    (ErrorReporter { tx }, handle)
}
