//! Air-core coil inductance from its geometry.
//!
//! `A = π·(d/2)²` and `L = N²·A·μ / l`, with `d` the coil diameter, `l` the
//! core length and `N` the number of turns, all SI.

use std::{f64::consts::PI, fmt};

use crate::core::{
    config::positive,
    constants::AIR_PERMEABILITY,
    error::ConfigError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coil {
    /// metres
    pub diameter: f64,
    /// metres
    pub length: f64,
    pub turns: u32,
    /// H/m
    pub permeability: f64,
}

impl Coil {
    /// Air-core coil.  Non-positive geometry and zero turns are rejected.
    pub fn new(diameter: f64, length: f64, turns: u32) -> Result<Self, ConfigError> {
        Self::with_permeability(diameter, length, turns, AIR_PERMEABILITY)
    }

    pub fn with_permeability(
        diameter: f64,
        length: f64,
        turns: u32,
        permeability: f64,
    ) -> Result<Self, ConfigError> {
        positive("diameter", diameter)?;
        positive("length", length)?;
        positive("permeability", permeability)?;
        if turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        Ok(Self {
            diameter,
            length,
            turns,
            permeability,
        })
    }

    /// Cross-sectional area in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * (self.diameter / 2.0).powi(2)
    }

    /// Inductance in henries.
    #[must_use]
    pub fn inductance(&self) -> f64 {
        let n = f64::from(self.turns);
        n.powi(2) * self.area() * self.permeability / self.length
    }

    #[must_use]
    pub fn report(&self) -> InductanceReport {
        InductanceReport {
            area: self.area(),
            inductance: self.inductance(),
        }
    }
}

/// Computed values, printed as `mm^2` and `μH`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductanceReport {
    /// m²
    pub area: f64,
    /// H
    pub inductance: f64,
}

impl fmt::Display for InductanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A = {:.2} mm^2", 1e6 * self.area)?;
        writeln!(f, "L = {:.3} μH", 1e6 * self.inductance)
    }
}
