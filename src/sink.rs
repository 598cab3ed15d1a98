//! Optional SD card log of robot actions.
//!
//! File logging is best-effort. Running without a card is normal at events,
//! so nothing in here ever stops the caller.

use alloc::format;
use core::fmt;

use log::{info, warn};
use snafu::Snafu;

/// Log file written at the root of the SD card.
pub const LOG_FILE: &str = "odom_log.txt";

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum SinkError {
    #[snafu(display("could not create {path}"))]
    Create { path: &'static str },
    #[snafu(display("could not write to the log file"))]
    Write,
}

/// Removable storage that log files can be created on.
pub trait Storage {
    type File: LogFile;

    fn is_present(&self) -> bool;

    /// Creates `path`, truncating it if it exists.
    fn create(&mut self, path: &'static str) -> Result<Self::File, SinkError>;
}

/// An open log file. Dropping it releases the handle.
pub trait LogFile {
    fn append(&mut self, text: &str) -> Result<(), SinkError>;
    fn flush(&mut self) -> Result<(), SinkError>;
}

/// Identifies which build produced a log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunMetadata {
    pub run: u32,
    pub version: &'static str,
    pub date: &'static str,
}

impl RunMetadata {
    pub const CURRENT: RunMetadata = RunMetadata {
        run: 1,
        version: "0.1 Alpha",
        date: "11-12-2020",
    };
}

impl fmt::Display for RunMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Program Run: {} Program Version: {} Version Date: {}",
            self.run, self.version, self.date
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry<'a> {
    pub millis: u64,
    pub message: &'a str,
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.millis, self.message)
    }
}

pub struct LogSink<S: Storage> {
    storage: S,
    path: &'static str,
    file: Option<S::File>,
}

impl<S: Storage> LogSink<S> {
    pub fn new(storage: S) -> Self {
        Self::with_path(storage, LOG_FILE)
    }
    pub fn with_path(storage: S, path: &'static str) -> Self {
        Self {
            storage,
            path,
            file: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    /// Starts a log session, returning whether file logging is now active.
    ///
    /// The file is truncated and a session marker stamped with `now` is
    /// written first.
    pub fn open(&mut self, now: u64) -> bool {
        if self.file.is_some() {
            return true;
        }
        if !self.storage.is_present() {
            info!("No SD card present, skipping file logging");
            return false;
        }
        match self.storage.create(self.path) {
            Ok(file) => {
                self.file = Some(file);
                info!("Logging to {}", self.path);
                self.write(LogEntry {
                    millis: now,
                    message: "Log session opened",
                });
                self.is_active()
            }
            Err(err) => {
                warn!("{err}, skipping file logging");
                false
            }
        }
    }

    /// Appends one line. Does nothing while inactive.
    pub fn write(&mut self, entry: LogEntry<'_>) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(err) = file.append(&format!("{entry}\n")) {
            warn!("{err}, file logging stopped");
            self.file = None;
        }
    }

    /// Flushes and releases the file. Returns whether a session was open.
    pub fn close(&mut self) -> bool {
        let Some(mut file) = self.file.take() else {
            return false;
        };
        if let Err(err) = file.flush() {
            warn!("{err} while closing");
        }
        info!("Closing log file");
        true
    }
}

impl<S: Storage> Drop for LogSink<S> {
    fn drop(&mut self) {
        self.close();
    }
}
