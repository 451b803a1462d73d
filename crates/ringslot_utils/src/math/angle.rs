use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::num::pmod;

/// An angle stored in radians.
///
/// No normalization happens implicitly: `Angle::from_degrees(540.0)` keeps
/// its full value until [`Angle::normalize`] is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle::from_radians(0.0);
    pub const QUARTER_CIRCLE: Angle = Angle::from_radians(FRAC_PI_2);
    pub const HALF_CIRCLE: Angle = Angle::from_radians(PI);
    pub const FULL_CIRCLE: Angle = Angle::from_radians(TAU);

    #[inline(always)]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline(always)]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    #[inline(always)]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    #[inline(always)]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    #[inline(always)]
    pub fn set_radians(&mut self, radians: f64) {
        self.radians = radians;
    }

    #[inline(always)]
    pub fn set_degrees(&mut self, degrees: f64) {
        self.radians = degrees.to_radians();
    }

    /// Signed shortest arc from `self` to `other`, in `[-π, π)`
    pub fn directional_distance_to(&self, other: Angle) -> Angle {
        let simple = other.radians - self.radians;
        Angle::from_radians(pmod(simple + PI, TAU) - PI)
    }

    /// Length of the shortest arc between the two angles, in `[0, π]`
    pub fn distance_to(&self, other: Angle) -> Angle {
        self.directional_distance_to(other).abs()
    }

    /// Brings the angle into `(-π, π]`
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    pub fn normalized(&self) -> Angle {
        -self.directional_distance_to(Angle::ZERO)
    }

    #[inline(always)]
    pub fn abs(self) -> Angle {
        Angle::from_radians(self.radians.abs())
    }

    #[inline(always)]
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    #[inline(always)]
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    #[inline(always)]
    pub fn tan(self) -> f64 {
        self.radians.tan()
    }

    /// -1, 0 or 1. NaN counts as 0
    pub fn sign(self) -> i32 {
        match self.radians.partial_cmp(&0.0) {
            Some(Ordering::Greater) => 1,
            Some(Ordering::Less) => -1,
            _ => 0,
        }
    }

    pub fn max(self, other: Angle) -> Angle {
        if self > other { self } else { other }
    }

    pub fn min(self, other: Angle) -> Angle {
        if self < other { self } else { other }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, scale: f64) -> Angle {
        Angle::from_radians(self.radians * scale)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, scale: f64) -> Angle {
        Angle::from_radians(self.radians / scale)
    }
}

impl Rem for Angle {
    type Output = Angle;

    fn rem(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians % rhs.radians)
    }
}
