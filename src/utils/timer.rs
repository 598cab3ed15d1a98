use core::time::Duration;

use crate::motion::Clock;

/// Tracks elapsed time against a period, reading time from a [`Clock`].
///
/// # Examples
/// ```ignore
/// use core::time::Duration;
/// use odom_bot::utils::timer::Timer;
///
/// let timer = Timer::start(Duration::from_secs(15), &clock);
/// let over = timer.elapsed_time(&clock) > timer.period();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    period: Duration,
    started_at: u64,
}

impl Timer {
    /// Starts a timer now.
    pub fn start(period: Duration, clock: &dyn Clock) -> Self {
        Self {
            period,
            started_at: clock.millis(),
        }
    }

    /// Returns the timer's configured period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns the elapsed time since the timer started.
    pub fn elapsed_time(&self, clock: &dyn Clock) -> Duration {
        Duration::from_millis(clock.millis().saturating_sub(self.started_at))
    }
}
