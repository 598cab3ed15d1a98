//! Unit-carrying quantities.
//!
//! Lengths are stored in meters and angles in radians. Constructors and
//! accessors exist for the units the robot is actually specified in
//! (inches for hardware, meters for field targets, degrees for headings).

use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

const METERS_PER_INCH: f64 = 0.0254;

#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Self = Self(0.0);

    pub const fn meters(meters: f64) -> Self {
        Self(meters)
    }
    pub fn inches(inches: f64) -> Self {
        Self(inches * METERS_PER_INCH)
    }
    pub fn feet(feet: f64) -> Self {
        Self(feet * 12.0 * METERS_PER_INCH)
    }

    pub const fn as_meters(self) -> f64 {
        self.0
    }
    pub fn as_inches(self) -> f64 {
        self.0 / METERS_PER_INCH
    }

    /// Whether this is a usable physical dimension.
    pub fn is_positive_finite(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} m", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub const fn radians(radians: f64) -> Self {
        Self(radians)
    }
    pub fn degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    pub const fn as_radians(self) -> f64 {
        self.0
    }
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} deg", self.as_degrees())
    }
}

/// Literal-style constructors, e.g. `1.0.m()` or `90.0.deg()`.
pub trait LengthExt {
    fn m(self) -> Length;
    fn inch(self) -> Length;
}

impl LengthExt for f64 {
    fn m(self) -> Length {
        Length::meters(self)
    }
    fn inch(self) -> Length {
        Length::inches(self)
    }
}

pub trait AngleExt {
    fn deg(self) -> Angle;
    fn rad(self) -> Angle;
}

impl AngleExt for f64 {
    fn deg(self) -> Angle {
        Angle::degrees(self)
    }
    fn rad(self) -> Angle {
        Angle::radians(self)
    }
}
