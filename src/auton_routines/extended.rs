use alloc::vec::Vec;
use core::time::Duration;

use super::{AutonRoutine, Command};
use crate::{
    pose::{Point, Pose},
    units::{AngleExt, LengthExt},
};

/// Extended autonomous: two laps of a one meter square.
pub struct Extended;

impl AutonRoutine for Extended {
    fn name() -> &'static str {
        "Extended"
    }

    fn time_budget() -> Option<Duration> {
        Some(Duration::from_secs(45))
    }

    fn commands() -> Vec<Command> {
        let corners = [
            Point::new(1.0.m(), 0.0.m()),
            Point::new(1.0.m(), 1.0.m()),
            Point::new(0.0.m(), 1.0.m()),
            Point::new(0.0.m(), 0.0.m()),
        ];

        let mut commands = Vec::with_capacity(2 + corners.len() * 4 + 1);
        commands.push(Command::SetMaxVelocity(120.0));
        commands.push(Command::SetPose(Pose::origin()));
        for _ in 0..2 {
            for corner in corners {
                commands.push(Command::TurnToPoint(corner));
                commands.push(Command::DriveToPoint(corner));
            }
        }
        commands.push(Command::TurnToAngle(0.0.deg()));
        commands
    }
}
