use alloc::boxed::Box;
use core::time::Duration;

use async_trait::async_trait;
use evian::{
    control::loops::{AngularPid, Pid},
    drivetrain::model::{Differential, Tank},
    math::Vec2,
    motion::{Basic, Seeking},
    prelude::*,
    tracking::wheeled::{TrackingWheel, WheeledTracking},
};
use log::warn;
use vexide::prelude::{InertialSensor, Motor};

use super::hardware::{SharedEncoder, TrackingEncoders};
use crate::{
    config::ChassisConfig,
    drive::SideOutputs,
    motion::ChassisMotion,
    pose::{Point, Pose},
    units::{Angle as FieldAngle, Length},
};

/// Odometry chassis backed by evian.
///
/// evian works in inches with counterclockwise headings and y to the left.
/// Poses crossing this boundary flip y and heading so callers see x forward,
/// y right, clockwise headings.
pub struct OdomChassis {
    drivetrain: Drivetrain<Differential, WheeledTracking>,
    config: ChassisConfig,
    /// Volts.
    output_limit: f64,
}

impl OdomChassis {
    const LINEAR_PID: Pid = Pid::new(1.0, 0.0, 0.125, None);
    const LATERAL_PID: Pid = Pid::new(0.5, 0.0, 0.0, None);
    const ANGULAR_PID: AngularPid = AngularPid::new(16.0, 0.0, 1.0, None);
    const LINEAR_TOLERANCES: Tolerances = Tolerances::new()
        .error(1.0)
        .velocity(0.25)
        .duration(Duration::from_millis(15));
    const ANGULAR_TOLERANCES: Tolerances = Tolerances::new()
        .error(f64::to_radians(2.0))
        .velocity(0.09)
        .duration(Duration::from_millis(15));
    const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(
        left_motors: [Motor; 2],
        right_motors: [Motor; 2],
        encoders: &TrackingEncoders,
        imu: Option<InertialSensor>,
        config: ChassisConfig,
    ) -> Self {
        let diameter = config.tracking_wheel_diameter.as_inches();
        let half_track = config.tracking_track.as_inches() / 2.0;
        let tracking = WheeledTracking::new(
            (0.0, 0.0),
            0.0.deg(),
            [
                TrackingWheel::new(encoders.left.clone(), diameter, -half_track, None),
                TrackingWheel::new(encoders.right.clone(), diameter, half_track, None),
            ],
            [] as [TrackingWheel<SharedEncoder>; 0],
            imu,
        );
        let output_limit = config.velocity_fraction(config.max_velocity_rpm) * Motor::V5_MAX_VOLTAGE;

        Self {
            drivetrain: Drivetrain::new(Differential::new(left_motors, right_motors), tracking),
            config,
            output_limit,
        }
    }

    /// Open-loop side outputs for driver control.
    pub fn drive(&mut self, outputs: SideOutputs) {
        if let Err(err) = self.drivetrain.model.drive_tank(outputs.left, outputs.right) {
            warn!("drive motors: {err:?}");
        }
    }

    fn basic() -> Basic<Pid, AngularPid> {
        Basic {
            linear_controller: Self::LINEAR_PID,
            angular_controller: Self::ANGULAR_PID,
            linear_tolerances: Self::LINEAR_TOLERANCES,
            angular_tolerances: Self::ANGULAR_TOLERANCES,
            timeout: Some(Self::TIMEOUT),
        }
    }

    fn seeking() -> Seeking<Pid, Pid> {
        Seeking {
            linear_controller: Self::LINEAR_PID,
            lateral_controller: Self::LATERAL_PID,
            tolerances: Self::LINEAR_TOLERANCES,
            timeout: Some(Self::TIMEOUT),
        }
    }
}

fn to_evian(point: Point) -> (f64, f64) {
    (point.x.as_inches(), -point.y.as_inches())
}

#[async_trait(?Send)]
impl ChassisMotion for OdomChassis {
    async fn set_state(&mut self, pose: Pose) {
        let (x, y) = to_evian(pose.point());
        self.drivetrain.tracking.set_position(Vec2::new(x, y));
        self.drivetrain
            .tracking
            .set_heading((-pose.heading.as_degrees()).deg());
    }

    async fn state(&mut self) -> Pose {
        let position = self.drivetrain.tracking.position();
        let heading = self.drivetrain.tracking.heading();
        Pose::new(
            Length::inches(position.x),
            Length::inches(-position.y),
            FieldAngle::radians(-heading.as_radians()),
        )
    }

    async fn drive_to_point(&mut self, target: Point) {
        Self::seeking()
            .move_to_point(&mut self.drivetrain, to_evian(target))
            .with_linear_output_limit(self.output_limit)
            .await;
    }

    async fn turn_to_angle(&mut self, heading: FieldAngle) {
        Self::basic()
            .turn_to_heading(&mut self.drivetrain, (-heading.as_degrees()).deg())
            .with_angular_output_limit(self.output_limit)
            .await;
    }

    async fn turn_to_point(&mut self, target: Point) {
        Self::basic()
            .turn_to_point(&mut self.drivetrain, to_evian(target))
            .with_angular_output_limit(self.output_limit)
            .await;
    }

    fn set_max_velocity(&mut self, rpm: f64) {
        self.output_limit = self.config.velocity_fraction(rpm) * Motor::V5_MAX_VOLTAGE;
    }
}
