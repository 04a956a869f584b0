//! Search control: stop flag, time limit and node limit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// Consulted on every node entered. The external flag and the node limit are
/// checked each time; the clock is read only every 1024 nodes.
#[derive(Debug)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    time_limit: Option<Duration>,
    node_limit: Option<u64>,
}

impl SearchControl {
    /// Control that only responds to the external stop flag.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            time_limit: None,
            node_limit: None,
        }
    }

    /// Control with a private flag and no limits.
    pub fn unbounded() -> Self {
        Self::new_infinite(Arc::new(AtomicBool::new(false)))
    }

    /// Control with a wall-clock limit; the clock starts immediately.
    pub fn new_timed(stopped: Arc<AtomicBool>, limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
            ..Self::new_infinite(stopped)
        }
    }

    /// Abort once more than `nodes` nodes have been entered.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Check whether the search should abort immediately.
    ///
    /// When a limit fires, the stop flag is set so subsequent calls return
    /// without re-checking.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if let Some(limit) = self.node_limit
            && nodes > limit
        {
            self.stop();
            return true;
        }

        if nodes & 1023 != 0 {
            return false;
        }

        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// Request that the search stop.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Time since this control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_stops() {
        let control = SearchControl::unbounded();
        assert!(!control.should_stop(1));
        assert!(!control.should_stop(1 << 30));
    }

    #[test]
    fn external_flag_stops() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new_infinite(Arc::clone(&flag));
        assert!(!control.should_stop(5));
        flag.store(true, Ordering::Relaxed);
        assert!(control.should_stop(5));
    }

    #[test]
    fn node_limit_sets_flag() {
        let control = SearchControl::unbounded().with_node_limit(10);
        assert!(!control.should_stop(10));
        assert!(control.should_stop(11));
        assert!(control.stop_flag().load(Ordering::Relaxed));
        assert!(control.should_stop(1));
    }

    #[test]
    fn expired_clock_checked_on_boundary() {
        let control =
            SearchControl::new_timed(Arc::new(AtomicBool::new(false)), Duration::ZERO);
        assert!(!control.should_stop(1));
        assert!(control.should_stop(1024));
    }
}
