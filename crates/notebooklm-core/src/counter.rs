use std::sync::atomic::{AtomicU64, Ordering};

/// First `_reqid` value issued in a session.
pub const REQUEST_ID_BASE: u64 = 100_000;
/// Increment between consecutive `_reqid` values.
pub const REQUEST_ID_STEP: u64 = 100_000;

/// Monotonic request-id source shared by every call in a session.
///
/// The upstream uses `_reqid` to correlate requests; ids must never
/// repeat within a session, including across concurrent calls and
/// retried attempts. One draw per attempt.
#[derive(Debug)]
pub struct RequestCounter {
    next: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(REQUEST_ID_BASE),
        }
    }

    /// Draws the next id. Each call observes a distinct value.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(REQUEST_ID_STEP, Ordering::Relaxed)
    }
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn starts_at_base_and_steps_by_the_stride() {
        let counter = RequestCounter::new();
        assert_eq!(counter.next_id(), 100_000);
        assert_eq!(counter.next_id(), 200_000);
        assert_eq!(counter.next_id(), 300_000);
    }

    #[test]
    fn concurrent_draws_are_distinct() {
        let counter = Arc::new(RequestCounter::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| counter.next_id()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("draw thread panicked") {
                assert!(seen.insert(id), "request id {id} was issued twice");
                assert_eq!(id % REQUEST_ID_STEP, 0);
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
