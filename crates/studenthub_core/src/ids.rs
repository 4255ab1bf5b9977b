//! Record id generation.
//!
//! Widgets receive a generator instead of deriving ids from the clock, so
//! rapid successive adds cannot collide.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh, list-unique record ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUID ids. Default for persisted profiles.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids (`"1"`, `"2"`, ...), deterministic across runs.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
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
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
