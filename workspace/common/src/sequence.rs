//! Request sequencing for the output region.
//!
//! Every render request takes a token before it starts. When its response
//! settles, the response may only be committed if no newer request has been
//! started since: the last initiated request wins, not the last to settle.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counter of started requests. Clones observe the same sequence.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

/// Identity of one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier token.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no request newer than `token` has been started.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Runs `commit` only for the current request. Returns whether it ran.
    pub fn commit_if_current<F: FnOnce()>(&self, token: RequestToken, commit: F) -> bool {
        if self.is_current(token) {
            commit();
            true
        } else {
            tracing::debug!(
                "Discarding stale response for request {} (latest is {})",
                token.0,
                self.latest.load(Ordering::SeqCst)
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_tokens_increase() {
        let seq = RequestSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert_eq!(b.value(), a.value() + 1);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn test_late_response_of_superseded_request_is_discarded() {
        let seq = RequestSequence::new();
        let output = RefCell::new(String::new());

        // Region A starts, then region B starts before A settles.
        let a = seq.begin();
        let b = seq.begin();

        // B settles first and is committed.
        assert!(seq.commit_if_current(b, || *output.borrow_mut() = "B".to_string()));
        // A settles late and must not overwrite B.
        assert!(!seq.commit_if_current(a, || *output.borrow_mut() = "A".to_string()));

        assert_eq!(*output.borrow(), "B");
    }

    #[test]
    fn test_superseded_request_settling_first_is_also_discarded() {
        let seq = RequestSequence::new();
        let output = RefCell::new(String::new());

        let a = seq.begin();
        let b = seq.begin();

        assert!(!seq.commit_if_current(a, || *output.borrow_mut() = "A".to_string()));
        assert!(seq.commit_if_current(b, || *output.borrow_mut() = "B".to_string()));
        assert_eq!(*output.borrow(), "B");
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let a = seq.begin();
        let _b = other.begin();
        assert!(!seq.is_current(a));
    }
}
