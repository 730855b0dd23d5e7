//! Cancellable one-second tick schedule.
//!
//! The schedule is a `tokio::time::Interval` held in an `Option`. It is only
//! polled by the task that owns the engine, so dropping the interval in
//! `cancel` takes effect before any further tick can be observed.

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::trace;

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to the repeating tick. At most one interval is live at a time.
#[derive(Debug, Default)]
pub struct TickSchedule {
    /// Live interval, if armed
    ticker: Option<Interval>,
    /// Number of times the schedule has been armed
    arm_count: u64,
}

impl TickSchedule {
    /// Creates a cancelled schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the schedule so the first tick fires one period from now.
    ///
    /// Returns `false` without touching the live interval if already armed.
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self) -> bool {
        if self.ticker.is_some() {
            return false;
        }

        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ticker = Some(ticker);
        self.arm_count += 1;

        trace!(arm_count = self.arm_count, "tick schedule armed");
        true
    }

    /// Cancels the schedule. Returns `true` if an interval was live.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.ticker.take().is_some();
        if was_armed {
            trace!("tick schedule cancelled");
        }
        was_armed
    }

    /// Returns true while an interval is live.
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Returns how many times the schedule has been armed.
    pub fn arm_count(&self) -> u64 {
        self.arm_count
    }

    /// Waits for the next scheduled tick.
    ///
    /// Never resolves while the schedule is cancelled, which makes it safe to
    /// use as a `tokio::select!` branch.
    pub async fn tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_new_is_cancelled() {
        let schedule = TickSchedule::new();
        assert!(!schedule.is_armed());
        assert_eq!(schedule.arm_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_arm_twice_keeps_single_interval() {
        let mut schedule = TickSchedule::new();
        assert!(schedule.arm());
        assert!(!schedule.arm());
        assert!(schedule.is_armed());
        assert_eq!(schedule.arm_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let mut schedule = TickSchedule::new();
        assert!(!schedule.cancel());

        schedule.arm();
        assert!(schedule.cancel());
        assert!(!schedule.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut schedule = TickSchedule::new();
        schedule.arm();

        let start = Instant::now();
        schedule.tick().await;
        assert_eq!(start.elapsed(), TICK_PERIOD);

        schedule.tick().await;
        assert_eq!(start.elapsed(), TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_never_ticks() {
        let mut schedule = TickSchedule::new();
        schedule.arm();
        schedule.cancel();

        let result = timeout(Duration::from_secs(10), schedule.tick()).await;
        assert!(result.is_err(), "cancelled schedule must not tick");
    }
}
