//! Replay-protection nonce for on-chain typed data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to the LensHub signature nonce of the signed-in profile.
///
/// Cloning yields another handle to the same value.
#[derive(Debug, Clone, Default)]
pub struct NonceStore {
    value: Arc<AtomicU64>,
}

impl NonceStore {
    pub fn new(initial: u64) -> Self {
        Self {
            value: Arc::new(AtomicU64::new(initial)),
        }
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }

    pub fn set(&self, value: u64) {
        self.value.store(value, Ordering::SeqCst);
    }

    /// Advance after a signature has been consumed on chain.
    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }
}
