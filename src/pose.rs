use core::fmt;

use nalgebra::Vector2;

use crate::units::{Angle, Length};

/// A target on the field, in the odometry frame.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    /// Forward.
    pub x: Length,
    /// Lateral, positive to the right.
    pub y: Length,
}

impl Point {
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Reflects the point across the forward axis. Zero stays positive zero.
    pub fn mirrored(self) -> Self {
        Self::new(self.x, Length::ZERO - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Robot position and heading.
///
/// The frame is x forward, y to the right, with headings measured clockwise.
/// The position is stored in meters.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pose {
    pub position: Vector2<f64>,
    pub heading: Angle,
}

impl Default for Pose {
    fn default() -> Self {
        Self::origin()
    }
}

impl Pose {
    pub fn new(x: Length, y: Length, heading: Angle) -> Self {
        Self {
            position: Vector2::new(x.as_meters(), y.as_meters()),
            heading,
        }
    }
    pub fn origin() -> Self {
        Self::new(Length::ZERO, Length::ZERO, Angle::ZERO)
    }

    pub fn x(&self) -> Length {
        Length::meters(self.position.x)
    }
    pub fn y(&self) -> Length {
        Length::meters(self.position.y)
    }
    pub fn point(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    pub fn mirrored(&self) -> Self {
        Self::new(self.x(), Length::ZERO - self.y(), Angle::ZERO - self.heading)
    }
}

/// Meters and degrees, space separated.
impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} {:.6} {:.6}",
            self.position.x,
            self.position.y,
            self.heading.as_degrees()
        )
    }
}
