//! Wall-clock budget for one download.
//!
//! The budget is fixed once at process entry and passed through the download
//! as a plain value; there is no process-global timer state. Cancellation is
//! cooperative: the streaming loop polls [`Deadline::exceeded`] between
//! chunks, so overshoot is bounded by one chunk read (itself capped by the
//! HTTP read timeout).

use std::time::{Duration, Instant};

/// Elapsed-time budget with a fixed start point.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started_at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Starts the clock now with the given budget.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            budget,
        }
    }

    /// Returns true once the elapsed wall-clock time exceeds the budget.
    #[must_use]
    pub fn exceeded(&self) -> bool {
        self.started_at.elapsed() > self.budget
    }

    /// Whole seconds elapsed since the clock started.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// The configured budget in whole seconds.
    #[must_use]
    pub fn budget_secs(&self) -> u64 {
        self.budget.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_deadline_not_exceeded() {
        let deadline = Deadline::after(Duration::from_secs(600));
        assert!(!deadline.exceeded());
        assert_eq!(deadline.budget_secs(), 600);
    }

    #[test]
    fn test_zero_budget_exceeded_immediately() {
        let deadline = Deadline::after(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));
        assert!(deadline.exceeded());
    }

    #[test]
    fn test_elapsed_advances() {
        let deadline = Deadline::after(Duration::from_secs(600));
        std::thread::sleep(Duration::from_millis(5));
        assert!(deadline.elapsed_secs() < 600);
        assert!(!deadline.exceeded());
    }
}
