use alloc::{vec, vec::Vec};
use core::time::Duration;

use super::{AutonRoutine, Command};
use crate::{
    pose::{Point, Pose},
    units::{AngleExt, Length, LengthExt},
};

/// Programming skills.
pub struct Skills;

impl AutonRoutine for Skills {
    fn name() -> &'static str {
        "Skills"
    }

    fn time_budget() -> Option<Duration> {
        Some(Duration::from_secs(60))
    }

    fn commands() -> Vec<Command> {
        // Starts against the wall, one tile in from the corner, facing the field.
        let tile = Length::feet(2.0).as_meters();
        vec![
            Command::SetMaxVelocity(200.0),
            Command::SetPose(Pose::new(0.0.m(), tile.m(), 0.0.deg())),
            Command::DriveToPoint(Point::new((2.0 * tile).m(), tile.m())),
            Command::TurnToAngle(90.0.deg()),
            Command::DriveToPoint(Point::new((2.0 * tile).m(), (3.0 * tile).m())),
            Command::TurnToPoint(Point::new((4.0 * tile).m(), (3.0 * tile).m())),
            Command::DriveToPoint(Point::new((4.0 * tile).m(), (3.0 * tile).m())),
            Command::Wait(Duration::from_millis(500)),
            Command::SetMaxVelocity(100.0),
            Command::TurnToAngle(180.0.deg()),
            Command::DriveToPoint(Point::new((2.0 * tile).m(), (3.0 * tile).m())),
            Command::TurnToPoint(Point::new(0.0.m(), tile.m())),
            Command::DriveToPoint(Point::new(0.0.m(), tile.m())),
            Command::TurnToAngle(0.0.deg()),
        ]
    }
}
