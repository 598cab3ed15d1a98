//! Runs a [`Routine`] against a chassis controller.

use core::time::Duration;

use log::{debug, warn};

use crate::{
    auton_routines::{Command, Routine},
    journal::{Journal, Reading},
    motion::{ChassisMotion, EncoderReadout},
    sink::Storage,
    utils::timer::Timer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub commands_issued: usize,
    pub elapsed: Duration,
    pub over_budget: bool,
}

/// Issues each command of a routine exactly once, in order.
///
/// Motions are awaited until the chassis controller settles. Nothing here
/// reacts to where the robot ended up: no retries, no branching.
pub struct Sequencer<'a, S: Storage> {
    chassis: &'a mut dyn ChassisMotion,
    encoders: &'a dyn EncoderReadout,
    journal: Journal<'a, S>,
}

impl<'a, S: Storage> Sequencer<'a, S> {
    pub fn new(
        chassis: &'a mut dyn ChassisMotion,
        encoders: &'a dyn EncoderReadout,
        journal: Journal<'a, S>,
    ) -> Self {
        Self {
            chassis,
            encoders,
            journal,
        }
    }

    pub async fn run(&mut self, routine: &Routine) -> RunReport {
        let clock = self.journal.clock();
        let timer = Timer::start(routine.time_budget().unwrap_or_default(), clock);
        self.journal.record(format_args!(
            "Running {} ({})",
            routine.name(),
            routine.side().name()
        ));

        let mut commands_issued = 0;
        for &command in routine.commands() {
            self.execute(command).await;
            commands_issued += 1;
        }

        let elapsed = timer.elapsed_time(clock);
        let over_budget = routine
            .time_budget()
            .is_some_and(|budget| elapsed > budget);
        if over_budget {
            warn!(
                "{} took {} ms, over its {} ms budget",
                routine.name(),
                elapsed.as_millis(),
                timer.period().as_millis()
            );
        }
        self.journal.record(format_args!(
            "{} finished after {} commands",
            routine.name(),
            commands_issued
        ));

        RunReport {
            commands_issued,
            elapsed,
            over_budget,
        }
    }

    async fn execute(&mut self, command: Command) {
        self.journal.record(format_args!("{command}"));
        match command {
            Command::SetMaxVelocity(rpm) => self.chassis.set_max_velocity(rpm),
            Command::Wait(duration) => self.journal.clock().sleep(duration).await,
            Command::SetPose(pose) => self.chassis.set_state(pose).await,
            Command::DriveToPoint(target) => self.chassis.drive_to_point(target).await,
            Command::TurnToAngle(heading) => self.chassis.turn_to_angle(heading).await,
            Command::TurnToPoint(target) => self.chassis.turn_to_point(target).await,
        }
        if command.affects_pose() {
            debug!("{command:?} settled");
            self.report_encoders();
            self.report_pose().await;
        }
    }

    fn report_encoders(&mut self) {
        self.journal.echo(format_args!(
            "Encoder LEFT value: {} -- Encoder RIGHT value: {}",
            Reading(self.encoders.left()),
            Reading(self.encoders.right())
        ));
    }

    /// Always asks the controller; poses are never cached here.
    async fn report_pose(&mut self) {
        let pose = self.chassis.state().await;
        self.journal.record(format_args!("Get state: {pose}"));
    }
}
