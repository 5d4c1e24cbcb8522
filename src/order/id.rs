//! Order id generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique order ids.
pub trait IdGenerator: Send + Sync {
    /// Produce the next id. Ids are never reused by the same generator.
    fn next_id(&self) -> String;

    /// Make sure `taken` is not produced again. Generators whose ids cannot
    /// collide in practice ignore this.
    fn skip_past(&self, _taken: &str) {}
}

/// Which built-in generator a server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Monotonic decimal counter: "1", "2", "3", ...
    Sequential,
    /// Random v4 UUIDs.
    Uuid,
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::Sequential
    }
}

/// Monotonic counter rendered as decimal strings.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// Numeric ids move the counter beyond them; other ids never collide.
    fn skip_past(&self, taken: &str) {
        if let Ok(n) = taken.parse::<u64>() {
            self.next.fetch_max(n.saturating_add(1), Ordering::Relaxed);
        }
    }
}

/// Random ids from `uuid::Uuid::new_v4`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
