//! Strongly-typed numeric primitives for ringcal (zero-cost newtypes).
//!
//! Print-space lengths are millimetres, angles are degrees measured clockwise
//! from +x in screen space (y grows downward, so 90° points straight down).

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A point in print space (millimetres, y grows downward)
pub type Point = glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Length in millimetres
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a Length from millimetres (const-friendly, unchecked).
    #[inline]
    pub const fn mm(val: f64) -> Length {
        Length(val)
    }

    /// Convert inches to millimetres using the print shop's 25 mm per inch.
    #[inline]
    pub const fn inches(val: f64) -> Length {
        Length(val * MM_PER_INCH)
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let val = check_finite(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Length(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Midpoint between two lengths
    #[inline]
    pub fn midpoint(self, other: Length) -> Length {
        Length((self.0 + other.0) / 2.0)
    }
}

/// Inch-to-millimetre factor used throughout the print layout.
pub const MM_PER_INCH: f64 = 25.0;

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    /// Twelve o'clock in screen space.
    pub const TOP: Angle = Angle(-90.0);

    /// Create an Angle with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Angle, NumericError> {
        check_finite(val).map(Angle)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Degrees to radians, `angle * π / 180`.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI / 180.0
    }

    /// Absolute angular distance to another angle (no wrapping).
    #[inline]
    pub fn span_to(self, other: Angle) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}
