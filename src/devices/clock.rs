use alloc::boxed::Box;
use core::time::Duration;

use async_trait::async_trait;

use crate::motion::Clock;

/// The brain's millisecond timer.
pub struct SystemClock;

#[async_trait(?Send)]
impl Clock for SystemClock {
    fn millis(&self) -> u64 {
        // SAFETY: reading the system timer has no preconditions.
        u64::from(unsafe { vex_sdk::vexSystemTimeGet() })
    }

    async fn sleep(&self, duration: Duration) {
        vexide::time::sleep(duration).await;
    }
}
