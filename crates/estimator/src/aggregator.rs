//! Emissions aggregation.
//!
//! [`compute_emissions`] is a pure function from consumption + factor table to
//! a complete [`EmissionResults`]. Category totals and GHG Protocol scope
//! totals are two partitions of the same twelve contributions, so
//! `scope1 + scope2 + scope3 == energy + transport + waste` always holds.
//!
//! Scope attribution is fixed:
//!
//! | Scope | Sources                                                        |
//! |-------|----------------------------------------------------------------|
//! | 1     | natural gas, heating oil, petrol + diesel cars (owned fleet)   |
//! | 2     | grid electricity                                               |
//! | 3     | train + bus, flights, electric cars, all waste                 |

use serde::{Deserialize, Serialize};

use crate::consumption::{ConsumptionField, ConsumptionInput};
use crate::factors::ConversionFactors;
use crate::units::DistanceUnit;

// =============================================================================
// Result types
// =============================================================================

/// Category subtotals in kg CO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub energy: f64,
    pub transport: f64,
    pub waste: f64,
}

impl CategoryBreakdown {
    pub fn sum(&self) -> f64 {
        self.energy + self.transport + self.waste
    }
}

/// GHG Protocol scope subtotals in kg CO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeTotals {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

impl ScopeTotals {
    pub fn sum(&self) -> f64 {
        self.scope1 + self.scope2 + self.scope3
    }
}

/// Direct emissions from owned or controlled sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope1Details {
    pub natural_gas: f64,
    pub heating: f64,
    pub owned_vehicles: f64,
}

/// Indirect emissions from purchased energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope2Details {
    pub electricity: f64,
}

/// Value-chain emissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope3Details {
    pub public_transport: f64,
    pub flights: f64,
    pub electric_vehicles: f64,
    pub waste: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeDetails {
    pub scope1: Scope1Details,
    pub scope2: Scope2Details,
    pub scope3: Scope3Details,
}

/// Everything derived from one consumption snapshot. Monthly figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionResults {
    pub total: f64,
    pub breakdown: CategoryBreakdown,
    pub scopes: ScopeTotals,
    pub scope_details: ScopeDetails,
}

// =============================================================================
// Computation
// =============================================================================

/// Per-field contributions after unit normalization.
struct Contributions<'a> {
    input: &'a ConsumptionInput,
    factors: &'a ConversionFactors,
    unit: DistanceUnit,
}

impl Contributions<'_> {
    /// kg CO2e contributed by one field. Distances are brought into the
    /// table's unit before the factor is applied.
    fn of(&self, field: ConsumptionField) -> f64 {
        let mut quantity = self.input.get(field);
        if field.is_distance() {
            quantity = self.unit.convert(quantity, self.factors.distance_unit);
        }
        quantity * self.factors.factor(field)
    }

    fn sum(&self, fields: &[ConsumptionField]) -> f64 {
        fields.iter().map(|&f| self.of(f)).sum()
    }
}

/// Compute category, scope and detail totals.
///
/// `unit` is the unit the transport distances in `input` are expressed in.
/// Values are used as given: negative quantities or factors flow through
/// unclamped (a negative recycling factor is a real credit).
pub fn compute_emissions(
    input: &ConsumptionInput,
    factors: &ConversionFactors,
    unit: DistanceUnit,
) -> EmissionResults {
    use ConsumptionField as F;

    let c = Contributions {
        input,
        factors,
        unit,
    };

    let breakdown = CategoryBreakdown {
        energy: c.sum(&F::ENERGY),
        transport: c.sum(&F::TRANSPORT),
        waste: c.sum(&F::WASTE),
    };

    let scope_details = ScopeDetails {
        scope1: Scope1Details {
            natural_gas: c.of(F::NaturalGas),
            heating: c.of(F::Heating),
            owned_vehicles: c.of(F::CarPetrol) + c.of(F::CarDiesel),
        },
        scope2: Scope2Details {
            electricity: c.of(F::Electricity),
        },
        scope3: Scope3Details {
            public_transport: c.of(F::Train) + c.of(F::Bus),
            flights: c.of(F::Flight),
            electric_vehicles: c.of(F::CarElectric),
            waste: breakdown.waste,
        },
    };

    let d = &scope_details;
    let scopes = ScopeTotals {
        scope1: d.scope1.natural_gas + d.scope1.heating + d.scope1.owned_vehicles,
        scope2: d.scope2.electricity,
        scope3: d.scope3.public_transport
            + d.scope3.flights
            + d.scope3.electric_vehicles
            + d.scope3.waste,
    };

    EmissionResults {
        total: scopes.sum(),
        breakdown,
        scopes,
        scope_details,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADDITIVITY_TOLERANCE, KM_TO_MILES};

    fn uk() -> ConversionFactors {
        ConversionFactors::default()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < ADDITIVITY_TOLERANCE
    }

    #[test]
    fn test_zero_input_zero_output() {
        let r = compute_emissions(&ConsumptionInput::default(), &uk(), DistanceUnit::Miles);
        assert_eq!(r, EmissionResults::default());
        assert_eq!(r.total, 0.0);
    }

    #[test]
    fn test_household_energy_scenario() {
        let input = ConsumptionInput::default()
            .with(ConsumptionField::Electricity, 350.0)
            .with(ConsumptionField::NaturalGas, 500.0);
        let r = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        assert!(close(r.scopes.scope2, 350.0 * 0.21233));
        assert!(close(r.scopes.scope1, 500.0 * 0.18316));
        assert_eq!(r.scopes.scope3, 0.0);
        assert!(close(r.total, r.scopes.scope1 + r.scopes.scope2));
        assert!(close(r.breakdown.energy, r.total));
    }

    #[test]
    fn test_petrol_car_is_scope1_only() {
        let input = ConsumptionInput::default().with(ConsumptionField::CarPetrol, 400.0);
        let r = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        assert!(close(r.scopes.scope1, 400.0 * 0.17212));
        assert_eq!(r.scopes.scope2, 0.0);
        assert_eq!(r.scopes.scope3, 0.0);
        assert!(close(r.scope_details.scope1.owned_vehicles, r.scopes.scope1));
    }

    #[test]
    fn test_travel_is_scope3_only() {
        let input = ConsumptionInput::default()
            .with(ConsumptionField::Flight, 200.0)
            .with(ConsumptionField::Train, 100.0)
            .with(ConsumptionField::Bus, 50.0);
        let r = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        let expected = 200.0 * 0.24587 + 100.0 * 0.03694 + 50.0 * 0.10312;
        assert!(close(r.scopes.scope3, expected));
        assert_eq!(r.scopes.scope1, 0.0);
        assert_eq!(r.scopes.scope2, 0.0);
        assert!(close(r.scope_details.scope3.flights, 200.0 * 0.24587));
        assert!(close(
            r.scope_details.scope3.public_transport,
            100.0 * 0.03694 + 50.0 * 0.10312
        ));
    }

    #[test]
    fn test_electric_car_counts_as_value_chain() {
        let input = ConsumptionInput::default().with(ConsumptionField::CarElectric, 400.0);
        let r = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        assert_eq!(r.scopes.scope1, 0.0);
        assert!(close(r.scopes.scope3, 400.0 * 0.04738));
        assert!(close(r.scope_details.scope3.electric_vehicles, r.scopes.scope3));
    }

    #[test]
    fn test_scopes_sum_to_categories() {
        let mut input = ConsumptionInput::default();
        for (i, field) in ConsumptionField::all().enumerate() {
            input.set(field, 10.0 + i as f64 * 13.7);
        }
        for unit in [DistanceUnit::Km, DistanceUnit::Miles] {
            let r = compute_emissions(&input, &uk(), unit);
            assert!(close(r.scopes.sum(), r.breakdown.sum()), "unit {unit:?}");
            assert!(close(r.total, r.breakdown.sum()));
        }
    }

    #[test]
    fn test_km_input_is_normalized_into_mile_table() {
        let km = ConsumptionInput::default().with(ConsumptionField::CarDiesel, 100.0);
        let r = compute_emissions(&km, &uk(), DistanceUnit::Km);
        assert!(close(r.breakdown.transport, 100.0 * KM_TO_MILES * 0.16885));
    }

    #[test]
    fn test_mile_input_is_normalized_into_km_table() {
        let mut per_km = uk();
        per_km.distance_unit = DistanceUnit::Km;
        let miles = ConsumptionInput::default().with(ConsumptionField::Bus, 10.0);
        let r = compute_emissions(&miles, &per_km, DistanceUnit::Miles);
        assert!(close(r.breakdown.transport, 10.0 * 1.60934 * 0.10312));
    }

    #[test]
    fn test_unit_does_not_touch_energy_or_waste() {
        let input = ConsumptionInput::default()
            .with(ConsumptionField::Electricity, 100.0)
            .with(ConsumptionField::Landfill, 10.0);
        let a = compute_emissions(&input, &uk(), DistanceUnit::Km);
        let b = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        assert_eq!(a, b);
    }

    #[test]
    fn test_recycling_credit_propagates_negative() {
        let input = ConsumptionInput::default().with(ConsumptionField::Recycling, 1000.0);
        let r = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        assert!(r.breakdown.waste < 0.0);
        assert!(r.scopes.scope3 < 0.0);
        assert!(r.total < 0.0);
        assert!(close(r.total, -21.35));
    }

    #[test]
    fn test_recycling_offsets_landfill() {
        let landfill_only = ConsumptionInput::default()
            .with(ConsumptionField::Landfill, 50.0)
            .with(ConsumptionField::Compost, 20.0);
        let with_recycling = landfill_only.with(ConsumptionField::Recycling, 30.0);
        let a = compute_emissions(&landfill_only, &uk(), DistanceUnit::Miles);
        let b = compute_emissions(&with_recycling, &uk(), DistanceUnit::Miles);
        assert!(b.breakdown.waste < a.breakdown.waste);
        assert!(close(b.scope_details.scope3.waste, b.breakdown.waste));
    }

    #[test]
    fn test_linearity_per_field() {
        let base = ConsumptionInput::default()
            .with(ConsumptionField::Electricity, 120.0)
            .with(ConsumptionField::Train, 40.0)
            .with(ConsumptionField::Compost, 5.0);
        for field in ConsumptionField::all() {
            let one = base.with(field, 10.0);
            let three = base.with(field, 30.0);
            let zero = base.with(field, 0.0);
            let r0 = compute_emissions(&zero, &uk(), DistanceUnit::Km);
            let r1 = compute_emissions(&one, &uk(), DistanceUnit::Km);
            let r3 = compute_emissions(&three, &uk(), DistanceUnit::Km);
            let d1 = r1.total - r0.total;
            let d3 = r3.total - r0.total;
            assert!((d3 - 3.0 * d1).abs() < 1e-9, "{field:?}: {d1} vs {d3}");
            let s1 = r1.scopes.sum() - r0.scopes.sum();
            let s3 = r3.scopes.sum() - r0.scopes.sum();
            assert!((s3 - 3.0 * s1).abs() < 1e-9, "{field:?} scopes");
        }
    }

    #[test]
    fn test_negative_quantity_passes_through() {
        let input = ConsumptionInput::default().with(ConsumptionField::Electricity, -10.0);
        let r = compute_emissions(&input, &uk(), DistanceUnit::Miles);
        assert!(close(r.scopes.scope2, -10.0 * 0.21233));
    }
}
