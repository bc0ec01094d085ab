//! Emission conversion factors.
//!
//! A [`ConversionFactors`] table maps each of the twelve consumption fields to
//! a scalar in kg CO2e per input unit. The table is a Bevy resource so it can
//! be swapped at startup (see `--factors` in the app) without touching the
//! aggregator. Tables are replaced wholesale, never merged.
//!
//! | Category  | Unit of factor                                  |
//! |-----------|-------------------------------------------------|
//! | Energy    | kg CO2e / kWh                                   |
//! | Transport | kg CO2e / `distance_unit` (mile or km)          |
//! | Waste     | kg CO2e / kg (negative = avoided emissions)     |

mod tables;

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consumption::ConsumptionField;
use crate::error::FactorsError;
use crate::units::DistanceUnit;

pub use tables::{uk_ghg_2025, UK_GHG_2025_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyFactors {
    pub electricity: f64,
    pub natural_gas: f64,
    pub heating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportFactors {
    pub car_petrol: f64,
    pub car_diesel: f64,
    pub car_electric: f64,
    pub train: f64,
    pub bus: f64,
    pub flight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteFactors {
    pub landfill: f64,
    /// Usually negative: recycling credits avoided virgin-material emissions.
    pub recycling: f64,
    pub compost: f64,
}

/// A versioned, self-describing emission factor table.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    /// Stable identifier, e.g. `uk-ghg-2025`.
    pub version: String,
    /// Provenance of the numbers.
    pub source: String,
    /// Unit the transport factors are denominated in.
    pub distance_unit: DistanceUnit,
    pub energy: EnergyFactors,
    pub transport: TransportFactors,
    pub waste: WasteFactors,
}

impl Default for ConversionFactors {
    fn default() -> Self {
        uk_ghg_2025()
    }
}

impl ConversionFactors {
    /// Factor applied to `field`, in kg CO2e per unit.
    pub fn factor(&self, field: ConsumptionField) -> f64 {
        match field {
            ConsumptionField::Electricity => self.energy.electricity,
            ConsumptionField::NaturalGas => self.energy.natural_gas,
            ConsumptionField::Heating => self.energy.heating,
            ConsumptionField::CarPetrol => self.transport.car_petrol,
            ConsumptionField::CarDiesel => self.transport.car_diesel,
            ConsumptionField::CarElectric => self.transport.car_electric,
            ConsumptionField::Train => self.transport.train,
            ConsumptionField::Bus => self.transport.bus,
            ConsumptionField::Flight => self.transport.flight,
            ConsumptionField::Landfill => self.waste.landfill,
            ConsumptionField::Recycling => self.waste.recycling,
            ConsumptionField::Compost => self.waste.compost,
        }
    }

    /// Dotted key used in error messages and the JSON layout,
    /// e.g. `transport.car_petrol`.
    pub fn key(field: ConsumptionField) -> &'static str {
        match field {
            ConsumptionField::Electricity => "energy.electricity",
            ConsumptionField::NaturalGas => "energy.natural_gas",
            ConsumptionField::Heating => "energy.heating",
            ConsumptionField::CarPetrol => "transport.car_petrol",
            ConsumptionField::CarDiesel => "transport.car_diesel",
            ConsumptionField::CarElectric => "transport.car_electric",
            ConsumptionField::Train => "transport.train",
            ConsumptionField::Bus => "transport.bus",
            ConsumptionField::Flight => "transport.flight",
            ConsumptionField::Landfill => "waste.landfill",
            ConsumptionField::Recycling => "waste.recycling",
            ConsumptionField::Compost => "waste.compost",
        }
    }

    /// Human-readable unit of a factor, e.g. `kg CO2e / mile`.
    pub fn unit_label(&self, field: ConsumptionField) -> String {
        match field.fixed_unit() {
            Some(unit) => format!("kg CO2e / {unit}"),
            None => {
                let unit = match self.distance_unit {
                    DistanceUnit::Km => "km",
                    DistanceUnit::Miles => "mile",
                };
                format!("kg CO2e / {unit}")
            }
        }
    }

    /// Reject tables with an empty version or non-finite factors.
    pub fn validate(&self) -> Result<(), FactorsError> {
        if self.version.trim().is_empty() {
            return Err(FactorsError::MissingVersion);
        }
        for field in ConsumptionField::all() {
            if !self.factor(field).is_finite() {
                return Err(FactorsError::NonFiniteFactor {
                    key: Self::key(field).to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, FactorsError> {
        let table: ConversionFactors = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, FactorsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
