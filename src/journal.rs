use alloc::string::ToString;
use core::fmt;

use log::info;

use crate::{
    motion::Clock,
    sink::{LogEntry, LogSink, Storage},
};

/// Console output, optionally mirrored to the SD card log.
///
/// Console lines go through the `log` facade and are printed whether or not
/// file logging is active.
pub struct Journal<'a, S: Storage> {
    sink: &'a mut LogSink<S>,
    clock: &'a dyn Clock,
}

impl<'a, S: Storage> Journal<'a, S> {
    pub fn new(sink: &'a mut LogSink<S>, clock: &'a dyn Clock) -> Self {
        Self { sink, clock }
    }

    pub fn clock(&self) -> &'a dyn Clock {
        self.clock
    }

    /// Console and, if active, the log file.
    pub fn record(&mut self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        info!("{message}");
        if self.sink.is_active() {
            self.sink.write(LogEntry {
                millis: self.clock.millis(),
                message: &message,
            });
        }
    }

    /// Console only.
    pub fn echo(&mut self, args: fmt::Arguments<'_>) {
        info!("{args}");
    }
}

/// Formats a sensor reading that may be unavailable.
pub(crate) struct Reading(pub Option<i64>);

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("n/a"),
        }
    }
}
