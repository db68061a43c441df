//! Confirmation-gated deletion
//!
//! Decouples "the user asked to delete" from "the user confirmed".
//! The guard holds at most one pending intent: a display label plus the
//! payload needed to carry the deletion out. Confirming yields the
//! payload exactly once; cancelling discards it; a new request while
//! one is pending replaces it (last caller wins, no queueing).

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// What a pending deletion points at, dispatched by the command layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum DeleteTarget {
    Service(String),
    Category(String),
    Product(String),
    ProductCategory(String),
    Partner(String),
    Realization(String),
    Testimonial(String),
    News(String),
    Feedback(String),
}

struct PendingDelete<T> {
    label: String,
    payload: T,
}

/// Holder for the single pending deletion intent
pub struct DeleteGuard<T> {
    pending: Arc<Mutex<Option<PendingDelete<T>>>>,
}

impl<T> Clone for DeleteGuard<T> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<T> Default for DeleteGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeleteGuard<T> {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Store a deletion intent, replacing any pending one
    pub fn request(&self, label: impl Into<String>, payload: T) {
        let label = label.into();
        tracing::debug!("Deletion requested: {}", label);

        let mut pending = self.pending.lock().expect("deletion guard lock poisoned");
        if let Some(previous) = pending.as_ref() {
            tracing::debug!("Replacing pending deletion: {}", previous.label);
        }
        *pending = Some(PendingDelete { label, payload });
    }

    /// Take the pending intent; the payload is yielded at most once
    pub fn confirm(&self) -> Option<(String, T)> {
        self.pending
            .lock()
            .expect("deletion guard lock poisoned")
            .take()
            .map(|p| (p.label, p.payload))
    }

    /// Discard the pending intent without acting on it
    pub fn cancel(&self) {
        let discarded = self
            .pending
            .lock()
            .expect("deletion guard lock poisoned")
            .take();
        if let Some(p) = discarded {
            tracing::debug!("Deletion cancelled: {}", p.label);
        }
    }

    /// Label of the pending intent, for the confirmation prompt
    pub fn pending_label(&self) -> Option<String> {
        self.pending
            .lock()
            .expect("deletion guard lock poisoned")
            .as_ref()
            .map(|p| p.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_never_yields_the_payload() {
        let guard = DeleteGuard::new();

        guard.request("Manucure", DeleteTarget::Service("svc-1".to_string()));
        assert_eq!(guard.pending_label().as_deref(), Some("Manucure"));

        guard.cancel();

        assert!(guard.pending_label().is_none());
        assert!(guard.confirm().is_none());
    }

    #[test]
    fn test_confirm_yields_exactly_once() {
        let guard = DeleteGuard::new();

        guard.request("Manucure", DeleteTarget::Service("svc-1".to_string()));

        let (label, target) = guard.confirm().unwrap();
        assert_eq!(label, "Manucure");
        assert_eq!(target, DeleteTarget::Service("svc-1".to_string()));

        // A second confirm has nothing to yield
        assert!(guard.confirm().is_none());
    }

    #[test]
    fn test_last_request_wins() {
        let guard = DeleteGuard::new();

        guard.request("Première", DeleteTarget::News("nws-1".to_string()));
        guard.request("Seconde", DeleteTarget::News("nws-2".to_string()));

        // Only the second intent completes
        let (label, target) = guard.confirm().unwrap();
        assert_eq!(label, "Seconde");
        assert_eq!(target, DeleteTarget::News("nws-2".to_string()));
        assert!(guard.confirm().is_none());
    }
}
