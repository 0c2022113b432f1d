//! Render-cycle sequence numbers.
//!
//! Every cycle takes a token when it starts. A cycle whose fetch resolves after
//! a newer cycle has started is stale and must not render.

use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CycleToken(u64);

impl CycleToken {
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

impl Display for CycleToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing tokens and remembers the latest.
#[derive(Debug, Default)]
pub struct CycleTracker {
    latest: AtomicU64,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> CycleToken {
        CycleToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: CycleToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Latest issued token, if any cycle has started.
    pub fn latest(&self) -> Option<CycleToken> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            sequence => Some(CycleToken(sequence)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let tracker = CycleTracker::new();
        assert_eq!(tracker.latest(), None);

        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(tracker.latest(), Some(second));
        assert_eq!(second.to_string(), "#2");
    }
}
