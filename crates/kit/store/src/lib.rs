//! Error store and dispatch boundary.
//!
//! Consumes [`kit_core::NormalizedError`] values and implements the dispatch
//! convention those values are built for: surface the localized text to the
//! user (as bounded toast entries), execute attached follow-up actions
//! through an injected [`ActionSink`], and filter out error-report actions
//! so an error handler never feeds itself. Callers can hand errors to the
//! store directly ([`ErrorStore::observe`]) or through the clonable async
//! [`ErrorReporter`] backed by a bounded channel.
pub mod config;
pub mod store;
pub mod toast;
pub mod worker;

pub use config::StoreConfig;
pub use store::{ActionSink, ErrorStore};
pub use toast::{ToastEntry, ToastLog};
pub use worker::{ErrorReporter, ReportError, spawn_error_worker};
