//! Bounded log of user-facing error toasts.
use std::collections::VecDeque;

use kit_core::{Domain, NormalizedError};

/// One surfaced error: the text shown to the user plus the raw signal it
/// came from, kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub text: String,
    pub domain: Domain,
    pub code: i32,
}

impl ToastEntry {
    pub fn from_error(err: &NormalizedError) -> Self {
        Self {
            text: err.localized_text.clone(),
            domain: err.signal.domain(),
            code: err.signal.code(),
        }
    }
}

/// Circular buffer of toasts; the oldest entry is evicted at capacity.
#[derive(Clone, Debug)]
pub struct ToastLog {
    entries: VecDeque<ToastEntry>,
    capacity: usize,
}

impl ToastLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: ToastEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &ToastEntry> {
        self.entries.iter().rev().take(limit)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastEntry> {
        self.entries.iter()
    }
}
