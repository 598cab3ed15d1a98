//! Encoder probe for checking tracking wheels by hand.
//!
//! Push the chassis forward and both counts should climb.

use core::time::Duration;

use crate::{
    journal::{Journal, Reading},
    motion::EncoderReadout,
    sink::Storage,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderProbe {
    pub period: Duration,
    /// Stop after this many samples. `None` runs until the stop signal.
    pub max_samples: Option<u32>,
}

impl Default for EncoderProbe {
    fn default() -> Self {
        Self {
            period: Self::PERIOD,
            max_samples: None,
        }
    }
}

impl EncoderProbe {
    pub const PERIOD: Duration = Duration::from_millis(20);

    pub fn with_limit(max_samples: u32) -> Self {
        Self {
            max_samples: Some(max_samples),
            ..Self::default()
        }
    }

    /// Prints encoder counts every period until the sample limit is reached or
    /// `stop` returns true. Returns the number of samples printed.
    pub async fn run<S: Storage>(
        &self,
        encoders: &dyn EncoderReadout,
        journal: &mut Journal<'_, S>,
        stop: &dyn Fn() -> bool,
    ) -> u32 {
        let mut samples = 0;
        while self.max_samples.map_or(true, |max| samples < max) && !stop() {
            journal.echo(format_args!(
                "Encoder LEFT value: {} -- Encoder RIGHT value: {}",
                Reading(encoders.left()),
                Reading(encoders.right())
            ));
            samples += 1;
            journal.clock().sleep(self.period).await;
        }
        samples
    }
}
