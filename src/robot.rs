use core::time::Duration;

use autons::prelude::*;
use log::{info, warn};
use odom_bot::{
    auton_routines::{odometry_check::OdometryCheck, AutonVariant},
    config::{ChassisConfig, ProgramOptions},
    devices::{
        clock::SystemClock,
        hardware::{Hardware, TrackingEncoders},
        odom_chassis::OdomChassis,
        sd_card::SdCard,
    },
    diagnostics::EncoderProbe,
    drive::Sticks,
    pose::Point,
    session::{Session, SessionDevices, SessionMode, SessionReport},
    units::Length,
    utils::FieldSide,
};
use vexide::prelude::*;

/// Side the selected routine is driven from.
pub const FIELD_SIDE: FieldSide = FieldSide::Red;

pub struct Robot {
    chassis: OdomChassis,
    encoders: TrackingEncoders,
    master: Controller,
    partner: Controller,
    options: ProgramOptions,
    /// The routine the last selected route ran, replayed by the manual
    /// autonomous button.
    selected: AutonVariant,
}

impl Robot {
    pub async fn new(hardware: Hardware, config: ChassisConfig, options: ProgramOptions) -> Self {
        let Hardware {
            left_motors,
            right_motors,
            mut imu,
            encoders,
            master,
            partner,
        } = hardware;

        let imu = if config.use_imu {
            match imu.calibrate().await {
                Ok(()) => Some(imu),
                Err(err) => {
                    warn!("IMU calibration failed, tracking with wheels only: {err:?}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            chassis: OdomChassis::new(left_motors, right_motors, &encoders, imu, config),
            encoders,
            master,
            partner,
            options,
            selected: AutonVariant::OdometryCheck,
        }
    }

    pub async fn standard(&mut self) {
        self.run_variant(AutonVariant::Standard).await;
    }
    pub async fn extended(&mut self) {
        self.run_variant(AutonVariant::Extended).await;
    }
    pub async fn skills(&mut self) {
        self.run_variant(AutonVariant::Skills).await;
    }
    pub async fn odometry_check(&mut self) {
        self.run_variant(AutonVariant::OdometryCheck).await;
    }
    /// The odometry check, finishing by facing back toward the start.
    pub async fn odometry_check_facing_start(&mut self) {
        let start = Point::new(Length::ZERO, Length::ZERO);
        self.selected = AutonVariant::OdometryCheck;
        self.run_mode(SessionMode::Routine(OdometryCheck::routine_facing(
            start, FIELD_SIDE,
        )))
        .await;
    }

    /// Prints tracking encoder counts until B is pressed on either controller.
    pub async fn encoder_probe(&mut self) {
        self.run_mode(SessionMode::EncoderProbe(EncoderProbe::default()))
            .await;
    }

    async fn run_variant(&mut self, variant: AutonVariant) {
        self.selected = variant;
        self.run_mode(SessionMode::Routine(variant.routine(FIELD_SIDE)))
            .await;
    }

    async fn run_mode(&mut self, mode: SessionMode) -> SessionReport {
        let (master, partner) = (&self.master, &self.partner);
        let stop = || {
            [master, partner].into_iter().any(|controller| {
                controller
                    .state()
                    .is_ok_and(|state| state.button_b.is_pressed())
            })
        };

        let mut session = Session::new(SdCard);
        let report = session
            .run(
                &mode,
                SessionDevices {
                    chassis: &mut self.chassis,
                    encoders: &self.encoders,
                    clock: &SystemClock,
                    stop: &stop,
                },
            )
            .await;
        info!("{report:?}");
        report
    }
}

impl SelectCompete for Robot {
    async fn driver(&mut self) {
        info!("Driver control ({:?})", self.options.drive_mode);
        loop {
            let state = self.master.state().unwrap_or_default();

            if self.options.manual_auton {
                if state.button_right.is_now_pressed() {
                    self.selected = self.selected.next();
                    info!("Selected {:?}", self.selected);
                } else if state.button_left.is_now_pressed() {
                    self.selected = self.selected.previous();
                    info!("Selected {:?}", self.selected);
                }
                if state.button_a.is_now_pressed() {
                    self.run_variant(self.selected).await;
                }
            }

            let outputs = self.options.drive_mode.mix(Sticks {
                left_y: state.left_stick.y(),
                right_y: state.right_stick.y(),
                right_x: state.right_stick.x(),
            });
            self.chassis.drive(outputs);

            sleep(Duration::from_millis(20)).await;
        }
    }

    async fn disabled(&mut self) {}
}
