//! One logged run of the robot: open the SD card log, stamp the build, run a
//! routine or the encoder probe, close the log.

use alloc::string::ToString;

use log::info;

use crate::{
    auton_routines::Routine,
    diagnostics::EncoderProbe,
    journal::Journal,
    motion::{ChassisMotion, Clock, EncoderReadout},
    sequencer::{RunReport, Sequencer},
    sink::{LogEntry, LogSink, RunMetadata, Storage},
};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionMode {
    /// Print tracking encoder counts instead of moving.
    EncoderProbe(EncoderProbe),
    Routine(Routine),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub file_logging: bool,
    pub run: Option<RunReport>,
    pub probe_samples: Option<u32>,
}

/// The external pieces a session drives.
pub struct SessionDevices<'a> {
    pub chassis: &'a mut dyn ChassisMotion,
    pub encoders: &'a dyn EncoderReadout,
    pub clock: &'a dyn Clock,
    /// Cancels the encoder probe.
    pub stop: &'a dyn Fn() -> bool,
}

pub struct Session<S: Storage> {
    sink: LogSink<S>,
    metadata: RunMetadata,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self::with_sink(LogSink::new(storage), RunMetadata::CURRENT)
    }
    pub fn with_sink(sink: LogSink<S>, metadata: RunMetadata) -> Self {
        Self { sink, metadata }
    }

    /// Runs `mode` to completion. The log file, if it was opened, is closed
    /// before this returns.
    pub async fn run(&mut self, mode: &SessionMode, devices: SessionDevices<'_>) -> SessionReport {
        let SessionDevices {
            chassis,
            encoders,
            clock,
            stop,
        } = devices;

        if self.sink.open(clock.millis()) {
            self.sink.write(LogEntry {
                millis: clock.millis(),
                message: &self.metadata.to_string(),
            });
        }

        let mut report = SessionReport {
            file_logging: self.sink.is_active(),
            ..SessionReport::default()
        };
        {
            let mut journal = Journal::new(&mut self.sink, clock);
            journal.echo(format_args!("Setting up odometry"));
            match mode {
                SessionMode::EncoderProbe(probe) => {
                    report.probe_samples = Some(probe.run(encoders, &mut journal, stop).await);
                }
                SessionMode::Routine(routine) => {
                    let mut sequencer = Sequencer::new(chassis, encoders, journal);
                    report.run = Some(sequencer.run(routine).await);
                }
            }
        }

        self.sink.close();
        info!("Finished");
        report
    }
}
