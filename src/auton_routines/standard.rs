use alloc::{vec, vec::Vec};
use core::time::Duration;

use super::{AutonRoutine, Command};
use crate::{
    pose::{Point, Pose},
    units::{AngleExt, LengthExt},
};

/// Match autonomous.
pub struct Standard;

impl AutonRoutine for Standard {
    fn name() -> &'static str {
        "Standard"
    }

    fn time_budget() -> Option<Duration> {
        Some(Duration::from_secs(15))
    }

    fn commands() -> Vec<Command> {
        vec![
            Command::SetMaxVelocity(150.0),
            Command::SetPose(Pose::origin()),
            Command::DriveToPoint(Point::new(0.6.m(), 0.0.m())),
            Command::TurnToAngle(90.0.deg()),
            Command::DriveToPoint(Point::new(0.6.m(), 0.6.m())),
            Command::Wait(Duration::from_millis(250)),
            Command::TurnToPoint(Point::new(0.0.m(), 0.0.m())),
            Command::DriveToPoint(Point::new(0.0.m(), 0.0.m())),
        ]
    }
}
