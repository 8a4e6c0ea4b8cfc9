//! Reference-counted body scroll lock for overlapping modals.
//!
//! Every open modal holds a [`ScrollLockGuard`]. The first guard records the current
//! `overflow` value and switches it to `hidden`; the value is restored only when the
//! last guard is dropped, whatever the release order.

use crate::safe_nanoid;
use fxhash::FxHashSet;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

pub const LOCKED_OVERFLOW: &str = "hidden";

#[derive(Debug)]
struct LockState {
    overflow: String,
    saved: Option<String>,
    tokens: FxHashSet<String>,
}

/// Shared handle to the document body's scroll state.
#[derive(Debug, Clone)]
pub struct BodyScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl Default for BodyScrollLock {
    fn default() -> Self {
        Self::new("")
    }
}

impl BodyScrollLock {
    pub fn new(initial_overflow: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(LockState {
                overflow: initial_overflow.into(),
                saved: None,
                tokens: FxHashSet::default(),
            })),
        }
    }

    /// Locks scrolling until the returned guard is dropped.
    #[must_use = "The lock is released as soon as the guard is dropped."]
    pub fn acquire(&self) -> ScrollLockGuard {
        let token = safe_nanoid!();
        let mut state = self.state.lock();

        if state.tokens.is_empty() {
            let previous = std::mem::replace(&mut state.overflow, LOCKED_OVERFLOW.to_owned());
            state.saved = Some(previous);
        }
        state.tokens.insert(token.clone());
        trace!(token = %token, active = state.tokens.len(), "Body scroll locked");

        ScrollLockGuard { lock: self.clone(), token }
    }

    /// Inactive modals take no lock and leave the body untouched.
    #[must_use]
    pub fn acquire_if(&self, active: bool) -> Option<ScrollLockGuard> {
        active.then(|| self.acquire())
    }

    pub fn is_locked(&self) -> bool {
        !self.state.lock().tokens.is_empty()
    }

    pub fn active_locks(&self) -> usize {
        self.state.lock().tokens.len()
    }

    /// Current `overflow` style value of the body.
    pub fn overflow(&self) -> String {
        self.state.lock().overflow.clone()
    }

    /// Updates the body's `overflow` from outside the lock, e.g. by page code.
    ///
    /// While locked the value is recorded as the one to restore instead.
    pub fn set_overflow(&self, overflow: impl Into<String>) {
        let mut state = self.state.lock();
        if state.tokens.is_empty() {
            state.overflow = overflow.into();
        } else {
            state.saved = Some(overflow.into());
        }
    }

    fn release(&self, token: &str) {
        let mut state = self.state.lock();
        if !state.tokens.remove(token) {
            return;
        }

        if state.tokens.is_empty() {
            state.overflow = state.saved.take().unwrap_or_default();
            trace!(overflow = %state.overflow, "Body scroll restored");
        }
    }
}

/// Releases its lock token on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: BodyScrollLock,
    token: String,
}

impl ScrollLockGuard {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release(&self.token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_and_restores_on_drop() {
        let body = BodyScrollLock::new("auto");
        let guard = body.acquire();
        assert_eq!(body.overflow(), "hidden");
        assert!(body.is_locked());

        drop(guard);
        assert_eq!(body.overflow(), "auto");
        assert!(!body.is_locked());
    }

    #[test]
    fn inactive_request_leaves_body_alone() {
        let body = BodyScrollLock::new("visible");
        let guard = body.acquire_if(false);

        assert!(guard.is_none());
        assert_eq!(body.overflow(), "visible");
        assert_eq!(body.active_locks(), 0);
    }

    #[test]
    fn overlapping_locks_release_on_last_drop() {
        let body = BodyScrollLock::new("visible");
        let first = body.acquire();
        let second = body.acquire();
        assert_ne!(first.token(), second.token());

        drop(first);
        assert_eq!(body.overflow(), "hidden");

        drop(second);
        assert_eq!(body.overflow(), "visible");
    }

    #[test]
    fn external_updates_while_locked_are_restored_later() {
        let body = BodyScrollLock::default();
        let guard = body.acquire();
        body.set_overflow("scroll");
        assert_eq!(body.overflow(), "hidden");

        drop(guard);
        assert_eq!(body.overflow(), "scroll");
    }
}
