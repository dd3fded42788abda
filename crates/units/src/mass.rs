use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Kilograms in one solar mass
pub const KG_PER_SOLAR_MASS: f64 = 1.988_92e30;

/// A mass with solar masses as the base unit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    pub fn from_kg(value: f64) -> Self {
        Self(value / KG_PER_SOLAR_MASS)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_kg(&self) -> f64 {
        self.0 * KG_PER_SOLAR_MASS
    }

    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} M☉", self.0)
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}
