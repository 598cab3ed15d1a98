//! Compiled-in robot configuration.

use bon::bon;
use snafu::{ensure, Snafu};

use crate::{drive::DriveMode, ports::Gearset, units::Length};

#[derive(Debug, Snafu, PartialEq)]
pub enum ConfigError {
    #[snafu(display("{name} must be a positive length, got {value}"))]
    NonPositiveLength { name: &'static str, value: Length },
    #[snafu(display("{name} must be at least one tick per revolution"))]
    ZeroTicks { name: &'static str },
    #[snafu(display(
        "{ticks} motor ticks per revolution does not match the {gearset:?} cartridge ({expected})"
    ))]
    GearsetTicksMismatch {
        gearset: Gearset,
        ticks: u32,
        expected: u32,
    },
    #[snafu(display("max velocity {rpm} rpm is outside (0, {limit}] for this cartridge"))]
    VelocityOutOfRange { rpm: f64, limit: f64 },
}

/// Drive and tracking-wheel geometry handed to the motion library.
#[derive(Clone, Debug, PartialEq)]
pub struct ChassisConfig {
    pub gearset: Gearset,
    pub motor_ticks_per_revolution: u32,
    pub wheel_diameter: Length,
    /// Distance between the left and right drive wheels.
    pub wheel_track: Length,
    pub tracking_wheel_diameter: Length,
    /// Distance between the left and right tracking wheels.
    pub tracking_track: Length,
    pub tracking_ticks_per_revolution: u32,
    pub max_velocity_rpm: f64,
    /// Fuse the IMU heading into tracking instead of relying on the wheels alone.
    pub use_imu: bool,
}

#[bon]
impl ChassisConfig {
    #[builder]
    pub fn new(
        #[builder(default = Gearset::Green)] gearset: Gearset,
        motor_ticks_per_revolution: Option<u32>,
        wheel_diameter: Length,
        wheel_track: Length,
        tracking_wheel_diameter: Length,
        tracking_track: Length,
        #[builder(default = 360)] tracking_ticks_per_revolution: u32,
        #[builder(default = 100.0)] max_velocity_rpm: f64,
        #[builder(default)] use_imu: bool,
    ) -> Result<Self, ConfigError> {
        let motor_ticks_per_revolution =
            motor_ticks_per_revolution.unwrap_or(gearset.ticks_per_revolution());
        for (name, value) in [
            ("wheel diameter", wheel_diameter),
            ("wheel track", wheel_track),
            ("tracking wheel diameter", tracking_wheel_diameter),
            ("tracking track", tracking_track),
        ] {
            ensure!(
                value.is_positive_finite(),
                NonPositiveLengthSnafu { name, value }
            );
        }
        ensure!(
            tracking_ticks_per_revolution > 0,
            ZeroTicksSnafu {
                name: "tracking encoder"
            }
        );
        ensure!(
            motor_ticks_per_revolution > 0,
            ZeroTicksSnafu { name: "motor" }
        );
        ensure!(
            motor_ticks_per_revolution == gearset.ticks_per_revolution(),
            GearsetTicksMismatchSnafu {
                gearset,
                ticks: motor_ticks_per_revolution,
                expected: gearset.ticks_per_revolution(),
            }
        );
        ensure!(
            max_velocity_rpm > 0.0 && max_velocity_rpm <= gearset.rpm(),
            VelocityOutOfRangeSnafu {
                rpm: max_velocity_rpm,
                limit: gearset.rpm(),
            }
        );

        Ok(Self {
            gearset,
            motor_ticks_per_revolution,
            wheel_diameter,
            wheel_track,
            tracking_wheel_diameter,
            tracking_track,
            tracking_ticks_per_revolution,
            max_velocity_rpm,
            use_imu,
        })
    }

    /// Green cartridges, 4" drive wheels on a 15" track, 2.75" tracking
    /// wheels 9.75" apart on 360 tick encoders.
    pub fn robot() -> Result<Self, ConfigError> {
        Self::builder()
            .wheel_diameter(Length::inches(4.0))
            .wheel_track(Length::inches(15.0))
            .tracking_wheel_diameter(Length::inches(2.75))
            .tracking_track(Length::inches(9.75))
            .build()
    }

    /// Fraction of full motor output that corresponds to `rpm`.
    pub fn velocity_fraction(&self, rpm: f64) -> f64 {
        (rpm / self.gearset.rpm()).clamp(0.0, 1.0)
    }
}

/// Build-time switches for the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramOptions {
    pub drive_mode: DriveMode,
    /// Verbose console logging.
    pub debug: bool,
    /// Allow starting the selected routine from the controller during driver
    /// control, for testing without a competition switch. The selection is
    /// the last routine a route ran, stepped with the left and right buttons.
    /// Keep off at events.
    pub manual_auton: bool,
}

impl ProgramOptions {
    pub const ROBOT: ProgramOptions = ProgramOptions {
        drive_mode: DriveMode::Tank,
        debug: true,
        manual_auton: false,
    };
}
