#![cfg_attr(target_os = "vexos", no_main, no_std)]

#[cfg(target_os = "vexos")]
extern crate alloc;

#[cfg(target_os = "vexos")]
mod robot;

#[cfg(target_os = "vexos")]
#[vexide::main]
async fn main(peripherals: vexide::prelude::Peripherals) {
    use autons::{
        prelude::*,
        simple::{route, SimpleSelect},
    };
    use log::{error, info};
    use odom_bot::{
        config::{ChassisConfig, ProgramOptions},
        devices::hardware::Hardware,
        logger::SerialLogger,
        ports::PortMap,
    };
    use robot::Robot;
    use vexide::prelude::Peripherals;

    let options = ProgramOptions::ROBOT;
    if let Err(err) = SerialLogger.init_for(&options) {
        vexide::io::println!("logger already set: {err}");
    }

    let config = match ChassisConfig::robot() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid chassis config: {err}");
            return;
        }
    };

    // Ports are claimed from the port map below, so the typed port handles
    // are dropped here.
    let Peripherals {
        display,
        primary_controller,
        partner_controller,
        ..
    } = peripherals;
    let hardware = match Hardware::new(&PortMap::ROBOT, primary_controller, partner_controller) {
        Ok(hardware) => hardware,
        Err(err) => {
            error!("invalid port map: {err}");
            return;
        }
    };
    info!("Hardware ready");

    Robot::new(hardware, config, options)
        .await
        .compete(SimpleSelect::new(
            display,
            [
                route!("Standard", Robot::standard),
                route!("Extended", Robot::extended),
                route!("Skills", Robot::skills),
                route!("Odometry check", Robot::odometry_check),
                route!("Odometry check, face start", Robot::odometry_check_facing_start),
                route!("Encoder probe", Robot::encoder_probe),
            ],
        ))
        .await;
}

#[cfg(not(target_os = "vexos"))]
fn main() {
    eprintln!("odom_bot only runs on a V5 brain; upload it with `cargo v5 upload`.");
}
