//! Position coordinates
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinates attached to a [Fix](crate::prelude::Fix), expressed in ECEF
/// meters. The arbitration policy never interprets them: readings are
/// compared on age and accuracy only.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// ECEF coordinates in meters
    ecef_m: Vector3<f64>,
}

impl Position {
    /// Builds a new [Position] from ECEF coordinates expressed in meters.
    pub fn from_ecef_m(ecef_m: Vector3<f64>) -> Self {
        Self { ecef_m }
    }

    /// Returns ECEF coordinates in meters.
    pub fn ecef_m(&self) -> Vector3<f64> {
        self.ecef_m
    }

    /// Euclidean distance to another [Position], in meters.
    pub fn distance_m(&self, rhs: &Self) -> f64 {
        (self.ecef_m - rhs.ecef_m).norm()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x={:.1}m y={:.1}m z={:.1}m",
            self.ecef_m[0], self.ecef_m[1], self.ecef_m[2]
        )
    }
}
