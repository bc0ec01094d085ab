//! Built-in factor tables.

use super::{ConversionFactors, EnergyFactors, TransportFactors, WasteFactors};
use crate::config::KG_PER_TONNE;
use crate::units::DistanceUnit;

pub const UK_GHG_2025_VERSION: &str = "uk-ghg-2025";

/// UK Government GHG Conversion Factors 2025.
///
/// Transport is per mile (average petrol/diesel car, UK electric car,
/// national rail, local bus, domestic flight). Waste is published per tonne
/// and rescaled here to per kilogram to match the kg inputs.
pub fn uk_ghg_2025() -> ConversionFactors {
    ConversionFactors {
        version: UK_GHG_2025_VERSION.to_string(),
        source: "UK Government GHG Conversion Factors for Company Reporting 2025".to_string(),
        distance_unit: DistanceUnit::Miles,
        energy: EnergyFactors {
            // UK grid average
            electricity: 0.21233,
            natural_gas: 0.18316,
            // heating oil
            heating: 0.21615,
        },
        transport: TransportFactors {
            car_petrol: 0.17212,
            car_diesel: 0.16885,
            car_electric: 0.04738,
            train: 0.03694,
            bus: 0.10312,
            flight: 0.24587,
        },
        waste: WasteFactors {
            landfill: 467.13 / KG_PER_TONNE,
            recycling: -21.35 / KG_PER_TONNE,
            compost: 8.65 / KG_PER_TONNE,
        },
    }
}
