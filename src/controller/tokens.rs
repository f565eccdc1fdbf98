//! Per-kind request tokens
//!
//! Each refresh kind has its own monotonic counter. A completion is applied
//! only if it carries the newest token issued for its kind, so a slow response
//! can never overwrite a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum RefreshKind {
    Prediction,
    Stats,
    Transactions,
    Chart,
}

impl RefreshKind {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            RefreshKind::Prediction => 0,
            RefreshKind::Stats => 1,
            RefreshKind::Transactions => 2,
            RefreshKind::Chart => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RequestToken {
    pub kind: RefreshKind,
    pub seq: u64,
}

/// Shared between the controller, which issues tokens, and the dashboard
/// state, which checks them.
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    latest: Arc<[AtomicU64; RefreshKind::COUNT]>,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, kind: RefreshKind) -> RequestToken {
        let seq = self.latest[kind.index()].fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken { kind, seq }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest[token.kind.index()].load(Ordering::SeqCst) == token.seq
    }
}
