//! Fixed-rate simulation pacing
//!
//! The balloon moves a fixed distance per tick, so the simulation has to run
//! at a fixed rate no matter how often the window repaints. [`FramePacer`]
//! turns wall-clock time into a count of due ticks.

use std::time::Duration;
use tracing::debug;

/// Converts elapsed time into fixed-length simulation ticks
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    max_ticks_per_frame: u32,
    /// Session time up to which ticks have been issued
    simulated: Duration,
}

impl FramePacer {
    /// Ticks issued per frame after a stall; the rest of the backlog is dropped
    pub const DEFAULT_MAX_TICKS: u32 = 4;

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_ticks_per_frame: Self::DEFAULT_MAX_TICKS,
            simulated: Duration::ZERO,
        }
    }

    /// Limit how many ticks one frame may catch up on
    pub fn max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Session time of the most recently issued tick
    pub fn simulated(&self) -> Duration {
        self.simulated
    }

    /// Issue the ticks that are due at wall time `now`.
    ///
    /// Returns the session time of each tick in order. When more than
    /// `max_ticks_per_frame` are due, the extra backlog is skipped so the
    /// simulation does not try to replay a long stall.
    pub fn due_ticks(&mut self, now: Duration) -> Vec<Duration> {
        let mut ticks = Vec::new();
        if self.interval.is_zero() {
            return ticks;
        }

        while self.simulated + self.interval <= now {
            if ticks.len() as u32 == self.max_ticks_per_frame {
                let behind = now - self.simulated;
                debug!("Pacer dropped {:?} of backlog", behind);
                self.simulated = now;
                break;
            }
            self.simulated += self.interval;
            ticks.push(self.simulated);
        }

        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ticks_before_interval() {
        let mut pacer = FramePacer::new(Duration::from_millis(10));
        assert!(pacer.due_ticks(Duration::from_millis(9)).is_empty());
    }

    #[test]
    fn test_ticks_accumulate() {
        let mut pacer = FramePacer::new(Duration::from_millis(10));
        assert_eq!(
            pacer.due_ticks(Duration::from_millis(25)),
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        assert_eq!(
            pacer.due_ticks(Duration::from_millis(31)),
            vec![Duration::from_millis(30)]
        );
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut pacer = FramePacer::new(Duration::from_millis(10)).max_ticks_per_frame(2);
        let ticks = pacer.due_ticks(Duration::from_secs(1));
        assert_eq!(ticks.len(), 2);
        assert_eq!(pacer.simulated(), Duration::from_secs(1));
        assert!(pacer.due_ticks(Duration::from_millis(1005)).is_empty());
    }
}
