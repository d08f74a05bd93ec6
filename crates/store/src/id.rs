//! Process-wide ID generator

use registrar_core::IdPrefix;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter shared by every entity kind
///
/// All kinds draw from the same sequence, so `stu-1` and `crs-1` can never
/// both exist.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID for `prefix`
    pub fn next(&self, prefix: IdPrefix) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        prefix.format(n)
    }

    /// Last value handed out (0 if none)
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
