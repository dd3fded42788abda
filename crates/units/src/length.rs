use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Kilometres in one astronomical unit
pub const KM_PER_AU: f64 = 149_597_870.7;

/// A distance with AU as the base unit
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert_eq!(orbit.to_km(), 149_597_870.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value / KM_PER_AU)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 * KM_PER_AU
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} AU", self.0)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
