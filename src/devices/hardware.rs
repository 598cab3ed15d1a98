use alloc::rc::Rc;
use core::cell::RefCell;

use evian::tracking::sensor::RotarySensor;
use vexide::{
    devices::{adi::AdiPort, smart::SmartPort, PortError},
    prelude::{AdiEncoder, Controller, Direction, InertialSensor, Motor, Position},
};

use crate::{
    motion::EncoderReadout,
    ports::{Gearset, MotorPort, PortMap, PortError as PortMapError, QuadEncoderPorts},
};

/// An ADI encoder shared between tracking and the encoder readout.
#[derive(Clone)]
pub struct SharedEncoder(Rc<RefCell<AdiEncoder>>);

impl RotarySensor for SharedEncoder {
    type Error = PortError;

    fn position(&self) -> Result<Position, Self::Error> {
        self.0.borrow().position()
    }
}

pub struct TrackingEncoders {
    pub left: SharedEncoder,
    pub right: SharedEncoder,
    left_reversed: bool,
    right_reversed: bool,
}

fn counts(encoder: &SharedEncoder, reversed: bool) -> Option<i64> {
    // Quadrature encoders are 360 ticks per revolution, so degrees are ticks.
    let ticks = encoder.0.borrow().position().ok()?.as_degrees() as i64;
    Some(if reversed { -ticks } else { ticks })
}

impl EncoderReadout for TrackingEncoders {
    fn left(&self) -> Option<i64> {
        counts(&self.left, self.left_reversed)
    }
    fn right(&self) -> Option<i64> {
        counts(&self.right, self.right_reversed)
    }
}

/// Every device on the robot, built once from the port map.
pub struct Hardware {
    pub left_motors: [Motor; 2],
    pub right_motors: [Motor; 2],
    pub imu: InertialSensor,
    pub encoders: TrackingEncoders,
    pub master: Controller,
    pub partner: Controller,
}

impl Hardware {
    /// Claims the ports listed in `ports`.
    ///
    /// The caller must have dropped its `Peripherals` port handles; the
    /// controllers are the only peripherals taken by value.
    pub fn new(
        ports: &PortMap,
        master: Controller,
        partner: Controller,
    ) -> Result<Self, PortMapError> {
        ports.validate()?;

        Ok(Self {
            left_motors: [motor(&ports.left_front), motor(&ports.left_back)],
            right_motors: [motor(&ports.right_front), motor(&ports.right_back)],
            // SAFETY: `validate` checked this port is not shared.
            imu: InertialSensor::new(unsafe { SmartPort::new(ports.imu) }),
            encoders: TrackingEncoders {
                left: encoder(&ports.left_encoder),
                right: encoder(&ports.right_encoder),
                left_reversed: ports.left_encoder.reversed,
                right_reversed: ports.right_encoder.reversed,
            },
            master,
            partner,
        })
    }
}

fn motor(wiring: &MotorPort) -> Motor {
    let gearset = match wiring.gearset {
        Gearset::Red => vexide::prelude::Gearset::Red,
        Gearset::Green => vexide::prelude::Gearset::Green,
        Gearset::Blue => vexide::prelude::Gearset::Blue,
    };
    let direction = if wiring.reversed {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    // SAFETY: the port map was validated, so no other handle uses this port.
    Motor::new(unsafe { SmartPort::new(wiring.port) }, gearset, direction)
}

fn encoder(wiring: &QuadEncoderPorts) -> SharedEncoder {
    // SAFETY: the port map was validated, so no other handle uses these ports.
    let (top, bottom) = unsafe { (AdiPort::new(wiring.top, None), AdiPort::new(wiring.bottom, None)) };
    SharedEncoder(Rc::new(RefCell::new(AdiEncoder::new(top, bottom))))
}
