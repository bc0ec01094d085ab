use bevy::prelude::*;

pub mod advice;
pub mod agent_protocol;
pub mod aggregator;
pub mod calculator;
pub mod config;
pub mod consumption;
pub mod error;
pub mod factors;
pub mod input;
pub mod sets;
pub mod shares;
pub mod units;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use aggregator::{compute_emissions, EmissionResults};
pub use calculator::{
    CalculatorSettings, CurrentEmissions, EmissionsUpdated, ResetCalculator, SelectCategory,
    SetDistanceUnit, SetQuantity,
};
pub use consumption::{Category, ConsumptionField, ConsumptionInput};
pub use error::FactorsError;
pub use factors::ConversionFactors;
pub use sets::CalculatorSet;
pub use units::DistanceUnit;

/// Headless calculator: resources, events and the recompute pipeline.
///
/// Insert a [`ConversionFactors`] resource before adding the plugin to use a
/// table other than the canonical one.
pub struct EstimatorPlugin;

impl Plugin for EstimatorPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (CalculatorSet::Input, CalculatorSet::Compute).chain(),
        );

        app.add_plugins(calculator::CalculatorPlugin);

        if let Some(factors) = app.world().get_resource::<ConversionFactors>() {
            info!(
                "Emission factors: {} ({}), transport per {}",
                factors.version,
                factors.source,
                factors.distance_unit.label()
            );
        }
    }
}
