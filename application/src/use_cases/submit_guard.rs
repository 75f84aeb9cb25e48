//! In-flight guard for a submission form
//!
//! Each form (upload, ask) owns one guard. While a request from that form is
//! outstanding the guard is held, and further submissions are turned away
//! instead of queued. Dropping the permit releases the guard, so it comes
//! back on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: AtomicBool,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the guard, or `None` if a request is already in flight
    pub fn try_acquire(&self) -> Option<SubmitPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one request
#[derive(Debug)]
pub struct SubmitPermit<'a> {
    guard: &'a SubmitGuard,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_while_held() {
        let guard = SubmitGuard::new();
        let permit = guard.try_acquire();
        assert!(permit.is_some());
        assert!(guard.is_busy());
        assert!(guard.try_acquire().is_none());
    }

    #[test]
    fn test_released_on_drop() {
        let guard = SubmitGuard::new();
        {
            let _permit = guard.try_acquire().unwrap();
        }
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_some());
    }
}
