//! Distance units for the transport fields.
//!
//! Two separate conversions live here:
//!
//! - [`convert_transport_units`] rewrites the six stored distances when the
//!   user flips the km/miles selector, rounding to two decimals so repeated
//!   toggles don't accumulate floating-point noise.
//! - [`DistanceUnit::convert`] is the unrounded scalar conversion the
//!   aggregator uses to bring a distance into the unit a factor table is
//!   denominated in.

use serde::{Deserialize, Serialize};

use crate::config::{KM_TO_MILES, MILES_TO_KM, UNIT_TOGGLE_DECIMALS};
use crate::consumption::TransportInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

impl DistanceUnit {
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "miles",
        }
    }

    pub fn other(self) -> Self {
        match self {
            DistanceUnit::Km => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Km,
        }
    }

    /// Multiplier taking a distance in `self` to a distance in `to`.
    pub fn factor_to(self, to: DistanceUnit) -> f64 {
        match (self, to) {
            (DistanceUnit::Km, DistanceUnit::Miles) => KM_TO_MILES,
            (DistanceUnit::Miles, DistanceUnit::Km) => MILES_TO_KM,
            _ => 1.0,
        }
    }

    /// Unrounded conversion of a single distance.
    pub fn convert(self, value: f64, to: DistanceUnit) -> f64 {
        if self == to {
            value
        } else {
            value * self.factor_to(to)
        }
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Convert all six transport distances from `from` to `to`, rounding each to
/// two decimals. Returns an identical copy when the units match.
pub fn convert_transport_units(
    transport: &TransportInput,
    from: DistanceUnit,
    to: DistanceUnit,
) -> TransportInput {
    if from == to {
        return *transport;
    }
    let factor = from.factor_to(to);
    transport.map(|d| {
        if d == 0.0 {
            0.0
        } else {
            round_to(d * factor, UNIT_TOGGLE_DECIMALS)
        }
    })
}
