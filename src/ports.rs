//! The robot's port map.
//!
//! Every handle the program constructs is described here once. Smart ports
//! and three-wire (ADI) ports are separate namespaces on the brain, so
//! uniqueness is checked within each namespace.

use alloc::vec::Vec;

use snafu::{ensure, Snafu};

/// Highest smart port on a V5 brain.
pub const MAX_SMART_PORT: u8 = 21;
/// Highest three-wire port on a V5 brain (A through H).
pub const MAX_ADI_PORT: u8 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gearset {
    /// 36:1
    Red,
    /// 18:1
    Green,
    /// 6:1
    Blue,
}

impl Gearset {
    pub const fn rpm(self) -> f64 {
        match self {
            Gearset::Red => 100.0,
            Gearset::Green => 200.0,
            Gearset::Blue => 600.0,
        }
    }
    /// Internal encoder ticks per output revolution.
    pub const fn ticks_per_revolution(self) -> u32 {
        match self {
            Gearset::Red => 1800,
            Gearset::Green => 900,
            Gearset::Blue => 300,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MotorPort {
    pub port: u8,
    pub gearset: Gearset,
    pub reversed: bool,
}

impl MotorPort {
    pub const fn new(port: u8, reversed: bool) -> Self {
        Self {
            port,
            gearset: Gearset::Green,
            reversed,
        }
    }
}

/// A quadrature encoder occupies two adjacent three-wire ports.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuadEncoderPorts {
    pub top: u8,
    pub bottom: u8,
    pub reversed: bool,
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum PortError {
    #[snafu(display("{device} is on port {port}, which is outside 1..={max}"))]
    OutOfRange {
        device: &'static str,
        port: u8,
        max: u8,
    },
    #[snafu(display("{first} and {second} are both assigned to port {port}"))]
    Conflict {
        first: &'static str,
        second: &'static str,
        port: u8,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PortMap {
    pub left_front: MotorPort,
    pub left_back: MotorPort,
    pub right_front: MotorPort,
    pub right_back: MotorPort,
    pub imu: u8,
    pub radio: u8,
    pub vision: u8,
    pub left_encoder: QuadEncoderPorts,
    pub right_encoder: QuadEncoderPorts,
}

impl PortMap {
    /// The competition robot.
    pub const ROBOT: PortMap = PortMap {
        left_front: MotorPort::new(5, false),
        left_back: MotorPort::new(15, false),
        right_front: MotorPort::new(6, true),
        right_back: MotorPort::new(16, true),
        imu: 11,
        radio: 21,
        vision: 14,
        left_encoder: QuadEncoderPorts {
            top: 3,
            bottom: 4,
            reversed: false,
        },
        right_encoder: QuadEncoderPorts {
            top: 1,
            bottom: 2,
            reversed: false,
        },
    };

    pub fn smart_ports(&self) -> [(&'static str, u8); 7] {
        [
            ("left front motor", self.left_front.port),
            ("left back motor", self.left_back.port),
            ("right front motor", self.right_front.port),
            ("right back motor", self.right_back.port),
            ("imu", self.imu),
            ("radio", self.radio),
            ("vision sensor", self.vision),
        ]
    }

    pub fn adi_ports(&self) -> [(&'static str, u8); 4] {
        [
            ("left encoder top", self.left_encoder.top),
            ("left encoder bottom", self.left_encoder.bottom),
            ("right encoder top", self.right_encoder.top),
            ("right encoder bottom", self.right_encoder.bottom),
        ]
    }

    /// Checks that every port is in range and used at most once.
    ///
    /// Device construction relies on this to hand out each port exactly once.
    pub fn validate(&self) -> Result<(), PortError> {
        check_namespace(&self.smart_ports(), MAX_SMART_PORT)?;
        check_namespace(&self.adi_ports(), MAX_ADI_PORT)
    }
}

fn check_namespace(ports: &[(&'static str, u8)], max: u8) -> Result<(), PortError> {
    let mut seen: Vec<(&'static str, u8)> = Vec::with_capacity(ports.len());
    for &(device, port) in ports {
        ensure!(
            (1..=max).contains(&port),
            OutOfRangeSnafu { device, port, max }
        );
        if let Some(&(first, _)) = seen.iter().find(|(_, used)| *used == port) {
            return ConflictSnafu {
                first,
                second: device,
                port,
            }
            .fail();
        }
        seen.push((device, port));
    }
    Ok(())
}
