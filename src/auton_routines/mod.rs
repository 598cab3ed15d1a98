//! Autonomous routines as command lists.
//!
//! A routine is data: an ordered list of [`Command`]s that
//! [`crate::sequencer::Sequencer`] issues one after another. Routines are
//! written for the red side; [`Routine::for_side`] mirrors them for blue.

use alloc::vec::Vec;
use core::{fmt, time::Duration};

use crate::{
    pose::{Point, Pose},
    units::Angle,
    utils::FieldSide,
};

pub mod extended;
pub mod odometry_check;
pub mod skills;
pub mod standard;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Cap drive speed, in motor rpm.
    SetMaxVelocity(f64),
    /// Overwrite the odometry state.
    SetPose(Pose),
    DriveToPoint(Point),
    TurnToAngle(Angle),
    TurnToPoint(Point),
    Wait(Duration),
}

impl Command {
    pub fn zero_pose() -> Self {
        Command::SetPose(Pose::origin())
    }

    /// Whether the command can change the tracked pose, so the pose is worth
    /// reading back afterwards.
    pub fn affects_pose(&self) -> bool {
        !matches!(self, Command::SetMaxVelocity(_) | Command::Wait(_))
    }

    pub fn mirrored(self) -> Self {
        match self {
            Command::SetPose(pose) => Command::SetPose(pose.mirrored()),
            Command::DriveToPoint(point) => Command::DriveToPoint(point.mirrored()),
            Command::TurnToAngle(angle) => Command::TurnToAngle(Angle::ZERO - angle),
            Command::TurnToPoint(point) => Command::TurnToPoint(point.mirrored()),
            other => other,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetMaxVelocity(rpm) => write!(f, "Set the maximum velocity to: {rpm}RPM"),
            Command::SetPose(pose) => write!(
                f,
                "Setting starting position of {},{},{}",
                pose.x().as_meters(),
                pose.y().as_meters(),
                pose.heading.as_degrees()
            ),
            Command::DriveToPoint(point) => write!(f, "Drive to point {point}"),
            Command::TurnToAngle(angle) => write!(f, "Turn to heading {angle}"),
            Command::TurnToPoint(point) => write!(f, "Turn to face point {point}"),
            Command::Wait(duration) => write!(f, "Wait {} ms", duration.as_millis()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Routine {
    name: &'static str,
    side: FieldSide,
    time_budget: Option<Duration>,
    commands: Vec<Command>,
}

impl Routine {
    /// A red-side routine.
    pub fn new(name: &'static str, time_budget: Option<Duration>, commands: Vec<Command>) -> Self {
        Self {
            name,
            side: FieldSide::Red,
            time_budget,
            commands,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn side(&self) -> FieldSide {
        self.side
    }
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the routine as driven from `side`, mirroring lateral targets and
    /// headings when switching sides.
    pub fn for_side(mut self, side: FieldSide) -> Self {
        if side != self.side {
            self.commands = self.commands.into_iter().map(Command::mirrored).collect();
            self.side = side;
        }
        self
    }
}

/// Something that can be selected to run in the autonomous period.
pub trait AutonRoutine {
    fn name() -> &'static str;
    fn time_budget() -> Option<Duration>;

    /// The red-side command list.
    fn commands() -> Vec<Command>;

    fn routine(side: FieldSide) -> Routine
    where
        Self: Sized,
    {
        Routine::new(Self::name(), Self::time_budget(), Self::commands()).for_side(side)
    }
}

/// The routines this program ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutonVariant {
    /// 15 second match autonomous.
    Standard,
    /// 45 second extended autonomous.
    Extended,
    /// 60 second programming skills.
    Skills,
    /// Drives a known path to check tracking.
    OdometryCheck,
}

impl AutonVariant {
    pub const ALL: [AutonVariant; 4] = [
        AutonVariant::Standard,
        AutonVariant::Extended,
        AutonVariant::Skills,
        AutonVariant::OdometryCheck,
    ];

    /// The next variant in [`AutonVariant::ALL`], wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous variant in [`AutonVariant::ALL`], wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            AutonVariant::Standard => 0,
            AutonVariant::Extended => 1,
            AutonVariant::Skills => 2,
            AutonVariant::OdometryCheck => 3,
        }
    }

    pub fn routine(self, side: FieldSide) -> Routine {
        match self {
            AutonVariant::Standard => standard::Standard::routine(side),
            AutonVariant::Extended => extended::Extended::routine(side),
            AutonVariant::Skills => skills::Skills::routine(side),
            AutonVariant::OdometryCheck => odometry_check::OdometryCheck::routine(side),
        }
    }
}
