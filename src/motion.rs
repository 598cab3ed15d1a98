//! Seams to the outside world.
//!
//! The chassis controller, the tracking encoders and the system clock are
//! supplied by the caller. On the brain they are backed by evian and vexide
//! (see [`crate::devices`]); anything else can stand in for them.

use alloc::boxed::Box;
use core::time::Duration;

use async_trait::async_trait;

use crate::{
    pose::{Point, Pose},
    units::Angle,
};

/// A chassis controller with its own odometry and closed-loop control.
///
/// Every motion resolves once the controller considers the move settled.
#[async_trait(?Send)]
pub trait ChassisMotion {
    /// Overwrites the odometry state.
    async fn set_state(&mut self, pose: Pose);

    /// Reads the current odometry state. Implementations must not cache.
    async fn state(&mut self) -> Pose;

    async fn drive_to_point(&mut self, target: Point);
    async fn turn_to_angle(&mut self, heading: Angle);
    async fn turn_to_point(&mut self, target: Point);

    /// Caps drive speed in motor rpm for subsequent motions.
    fn set_max_velocity(&mut self, rpm: f64);
}

/// Raw tracking-wheel encoder counts. `None` when a sensor can't be read.
pub trait EncoderReadout {
    fn left(&self) -> Option<i64>;
    fn right(&self) -> Option<i64>;
}

#[async_trait(?Send)]
pub trait Clock {
    /// Milliseconds since program start.
    fn millis(&self) -> u64;

    async fn sleep(&self, duration: Duration);
}
