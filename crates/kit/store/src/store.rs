//! Synchronous error store.
use kit_core::{ActionDescriptor, NormalizedError};
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::toast::{ToastEntry, ToastLog};

/// Receives the follow-up actions a dispatched error carries.
///
/// Implementations decide what each action means for the embedding app
/// (leave the room, reconnect, refresh the seat list). Error-report actions
/// are filtered before this trait is reached.
pub trait ActionSink {
    fn dispatch(&mut self, action: &ActionDescriptor);
}

/// Discards every action; for stores that only surface text.
impl ActionSink for () {
    fn dispatch(&mut self, _action: &ActionDescriptor) {}
}

/// Records dispatched actions in order; the simplest real sink.
impl ActionSink for Vec<ActionDescriptor> {
    fn dispatch(&mut self, action: &ActionDescriptor) {
        self.push(action.clone());
    }
}

/// Terminal consumer of normalized errors.
///
/// `observe` applies the dispatch convention: log the retained signal, toast
/// the localized text, forward every non-report action to the sink in input
/// order, and skip report actions so the handler cannot loop on itself.
#[derive(Debug)]
pub struct ErrorStore<S> {
    toasts: ToastLog,
    sink: S,
}

impl<S: ActionSink> ErrorStore<S> {
    pub fn new(config: &StoreConfig, sink: S) -> Self {
        Self {
            toasts: ToastLog::new(config.toast_capacity),
            sink,
        }
    }

    /// Consumes one error: log, toast, dispatch.
    pub fn observe(&mut self, err: NormalizedError) {
        warn!(
            domain = %err.signal.domain(),
            code = err.signal.code(),
            message = %err.message,
            "operation failed: {}",
            err.localized_text
        );
        self.toasts.push(ToastEntry::from_error(&err));

        for action in &err.actions {
            if action.is_error_report() {
                debug!(%action, "skipping error-report action");
                continue;
            }
            self.sink.dispatch(action);
        }
    }

    /// Toasts surfaced so far.
    pub fn toasts(&self) -> &ToastLog {
        &self.toasts
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Releases the sink, e.g. to inspect recorded actions after a run.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
