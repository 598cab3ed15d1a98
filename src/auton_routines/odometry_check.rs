use alloc::{vec, vec::Vec};
use core::time::Duration;

use super::{AutonRoutine, Command, Routine};
use crate::{
    pose::Point,
    units::{AngleExt, LengthExt},
    utils::FieldSide,
};

/// Drives a known path and reports tracking after every step.
///
/// The pose is zeroed before each leg so the readouts can be checked by eye:
/// one meter straight ahead, then a 45 degree pivot and about 1.4 m to
/// (1 m, 1 m), then a turn to face 90 degrees.
pub struct OdometryCheck;

impl OdometryCheck {
    /// The check with a final turn to face `point`, given in red-side
    /// coordinates.
    pub fn routine_facing(point: Point, side: FieldSide) -> Routine {
        let mut commands = Self::commands();
        commands.push(Command::TurnToPoint(point));
        Routine::new(Self::name(), Self::time_budget(), commands).for_side(side)
    }
}

impl AutonRoutine for OdometryCheck {
    fn name() -> &'static str {
        "Odometry Check"
    }

    fn time_budget() -> Option<Duration> {
        None
    }

    fn commands() -> Vec<Command> {
        vec![
            Command::SetMaxVelocity(100.0),
            Command::zero_pose(),
            Command::DriveToPoint(Point::new(1.0.m(), 0.0.m())),
            Command::zero_pose(),
            Command::DriveToPoint(Point::new(1.0.m(), 1.0.m())),
            Command::TurnToAngle(90.0.deg()),
        ]
    }
}
