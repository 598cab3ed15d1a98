//! Driver control stick mixing.

use num_traits::Float;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveMode {
    /// Left stick drives the left side, right stick the right side.
    Tank,
    /// Left stick throttle, right stick steer.
    Arcade,
}

/// Joystick axes, each in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sticks {
    pub left_y: f64,
    pub right_y: f64,
    pub right_x: f64,
}

/// Side outputs as fractions of full scale, each in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideOutputs {
    pub left: f64,
    pub right: f64,
}

impl DriveMode {
    pub fn mix(self, sticks: Sticks) -> SideOutputs {
        match self {
            DriveMode::Tank => SideOutputs {
                left: sticks.left_y.clamp(-1.0, 1.0),
                right: sticks.right_y.clamp(-1.0, 1.0),
            },
            DriveMode::Arcade => arcade_desaturate(sticks.left_y, sticks.right_x),
        }
    }
}

/// Mixes throttle and steer, scaling both down when their sum would saturate
/// a side so the commanded curvature is kept.
pub fn arcade_desaturate(throttle: f64, steer: f64) -> SideOutputs {
    let throttle = throttle.clamp(-1.0, 1.0);
    let steer = steer.clamp(-1.0, 1.0);
    let sum = Float::max(Float::abs(throttle) + Float::abs(steer), 1.0);
    SideOutputs {
        left: (throttle + steer) / sum,
        right: (throttle - steer) / sum,
    }
}
