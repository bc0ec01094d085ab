//! Monthly consumption figures entered by the user.
//!
//! Twelve quantities grouped into three categories. Every field defaults to
//! zero and can be addressed individually through [`ConsumptionField`], which
//! also carries the labels the front-ends display.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Categories
// =============================================================================

/// Input category. Doubles as the tab selector in the calculator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Energy,
    Transport,
    Waste,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Energy, Category::Transport, Category::Waste];

    pub fn name(self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Transport => "Transport",
            Category::Waste => "Waste",
        }
    }

    /// Fields belonging to this category, in display order.
    pub fn fields(self) -> &'static [ConsumptionField] {
        match self {
            Category::Energy => &ConsumptionField::ENERGY,
            Category::Transport => &ConsumptionField::TRANSPORT,
            Category::Waste => &ConsumptionField::WASTE,
        }
    }

    /// Heading and body of the advice shown under this category's inputs.
    pub fn tip(self) -> (&'static str, &'static str) {
        match self {
            Category::Energy => (
                "Quick Tip:",
                "The average UK household uses about 350 kWh of electricity and 500 kWh \
                 of gas per month. Switching to renewable energy tariffs can significantly \
                 reduce your Scope 2 emissions.",
            ),
            Category::Transport => (
                "Did you know?",
                "Electric vehicles produce about 70% fewer emissions than petrol cars, \
                 while trains and buses are even more efficient per passenger mile. \
                 Consider carpooling or public transport for regular commutes.",
            ),
            Category::Waste => (
                "Reduce Impact:",
                "Recycling actually reduces emissions compared to landfill! Composting \
                 organic waste cuts methane emissions. Aim to reduce landfill waste and \
                 increase recycling and composting.",
            ),
        }
    }
}

// =============================================================================
// Field keys
// =============================================================================

/// Typed key for one of the twelve consumption quantities.
///
/// The snake_case serde names are the field identifiers used by the agent
/// protocol (`{"cmd":"set","field":"car_petrol","value":400}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionField {
    Electricity,
    NaturalGas,
    Heating,
    CarPetrol,
    CarDiesel,
    CarElectric,
    Train,
    Bus,
    Flight,
    Landfill,
    Recycling,
    Compost,
}

impl ConsumptionField {
    pub const ENERGY: [ConsumptionField; 3] = [
        ConsumptionField::Electricity,
        ConsumptionField::NaturalGas,
        ConsumptionField::Heating,
    ];

    pub const TRANSPORT: [ConsumptionField; 6] = [
        ConsumptionField::CarPetrol,
        ConsumptionField::CarDiesel,
        ConsumptionField::CarElectric,
        ConsumptionField::Train,
        ConsumptionField::Bus,
        ConsumptionField::Flight,
    ];

    pub const WASTE: [ConsumptionField; 3] = [
        ConsumptionField::Landfill,
        ConsumptionField::Recycling,
        ConsumptionField::Compost,
    ];

    /// All twelve fields, grouped by category.
    pub fn all() -> impl Iterator<Item = ConsumptionField> {
        Category::ALL
            .into_iter()
            .flat_map(|category| category.fields().iter().copied())
    }

    pub fn category(self) -> Category {
        match self {
            ConsumptionField::Electricity
            | ConsumptionField::NaturalGas
            | ConsumptionField::Heating => Category::Energy,
            ConsumptionField::CarPetrol
            | ConsumptionField::CarDiesel
            | ConsumptionField::CarElectric
            | ConsumptionField::Train
            | ConsumptionField::Bus
            | ConsumptionField::Flight => Category::Transport,
            ConsumptionField::Landfill
            | ConsumptionField::Recycling
            | ConsumptionField::Compost => Category::Waste,
        }
    }

    /// Whether the quantity is a distance governed by the unit selector.
    pub fn is_distance(self) -> bool {
        self.category() == Category::Transport
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsumptionField::Electricity => "Electricity",
            ConsumptionField::NaturalGas => "Natural Gas",
            ConsumptionField::Heating => "Heating Oil",
            ConsumptionField::CarPetrol => "Car - Petrol",
            ConsumptionField::CarDiesel => "Car - Diesel",
            ConsumptionField::CarElectric => "Car - Electric",
            ConsumptionField::Train => "Train",
            ConsumptionField::Bus => "Bus",
            ConsumptionField::Flight => "Flights",
            ConsumptionField::Landfill => "Landfill Waste",
            ConsumptionField::Recycling => "Recycling",
            ConsumptionField::Compost => "Compost",
        }
    }

    /// Short description shown next to the label.
    pub fn hint(self) -> &'static str {
        match self {
            ConsumptionField::Electricity => "Grid electricity usage",
            ConsumptionField::NaturalGas => "For heating",
            ConsumptionField::Heating => "Alternative heating",
            ConsumptionField::CarPetrol | ConsumptionField::CarDiesel => "Personal vehicle",
            ConsumptionField::CarElectric => "Battery EV",
            ConsumptionField::Train => "Rail travel",
            ConsumptionField::Bus => "Local bus",
            ConsumptionField::Flight => "Air travel",
            ConsumptionField::Landfill => "General waste bin",
            ConsumptionField::Recycling => "Recyclable materials",
            ConsumptionField::Compost => "Organic waste",
        }
    }

    /// Typical monthly figure used as the input placeholder.
    pub fn example(self) -> f64 {
        match self {
            ConsumptionField::Electricity => 350.0,
            ConsumptionField::NaturalGas => 500.0,
            ConsumptionField::Heating => 100.0,
            ConsumptionField::CarPetrol
            | ConsumptionField::CarDiesel
            | ConsumptionField::CarElectric => 400.0,
            ConsumptionField::Train => 100.0,
            ConsumptionField::Bus => 50.0,
            ConsumptionField::Flight => 200.0,
            ConsumptionField::Landfill => 50.0,
            ConsumptionField::Recycling => 30.0,
            ConsumptionField::Compost => 20.0,
        }
    }

    /// Unit label for non-distance fields. Distance fields take their label
    /// from the active [`crate::units::DistanceUnit`].
    pub fn fixed_unit(self) -> Option<&'static str> {
        match self.category() {
            Category::Energy => Some("kWh"),
            Category::Waste => Some("kg"),
            Category::Transport => None,
        }
    }
}

// =============================================================================
// Input model
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyInput {
    pub electricity_kwh: f64,
    pub natural_gas_kwh: f64,
    pub heating_units: f64,
}

/// Six distances, all in the unit held by `CalculatorSettings::unit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportInput {
    pub car_petrol: f64,
    pub car_diesel: f64,
    pub car_electric: f64,
    pub train: f64,
    pub bus: f64,
    pub flight: f64,
}

impl TransportInput {
    /// Apply `f` to every distance.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            car_petrol: f(self.car_petrol),
            car_diesel: f(self.car_diesel),
            car_electric: f(self.car_electric),
            train: f(self.train),
            bus: f(self.bus),
            flight: f(self.flight),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteInput {
    pub landfill_kg: f64,
    pub recycling_kg: f64,
    pub compost_kg: f64,
}

/// Monthly consumption across all three categories.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionInput {
    pub energy: EnergyInput,
    pub transport: TransportInput,
    pub waste: WasteInput,
}

impl ConsumptionInput {
    pub fn get(&self, field: ConsumptionField) -> f64 {
        match field {
            ConsumptionField::Electricity => self.energy.electricity_kwh,
            ConsumptionField::NaturalGas => self.energy.natural_gas_kwh,
            ConsumptionField::Heating => self.energy.heating_units,
            ConsumptionField::CarPetrol => self.transport.car_petrol,
            ConsumptionField::CarDiesel => self.transport.car_diesel,
            ConsumptionField::CarElectric => self.transport.car_electric,
            ConsumptionField::Train => self.transport.train,
            ConsumptionField::Bus => self.transport.bus,
            ConsumptionField::Flight => self.transport.flight,
            ConsumptionField::Landfill => self.waste.landfill_kg,
            ConsumptionField::Recycling => self.waste.recycling_kg,
            ConsumptionField::Compost => self.waste.compost_kg,
        }
    }

    pub fn set(&mut self, field: ConsumptionField, value: f64) {
        let slot = match field {
            ConsumptionField::Electricity => &mut self.energy.electricity_kwh,
            ConsumptionField::NaturalGas => &mut self.energy.natural_gas_kwh,
            ConsumptionField::Heating => &mut self.energy.heating_units,
            ConsumptionField::CarPetrol => &mut self.transport.car_petrol,
            ConsumptionField::CarDiesel => &mut self.transport.car_diesel,
            ConsumptionField::CarElectric => &mut self.transport.car_electric,
            ConsumptionField::Train => &mut self.transport.train,
            ConsumptionField::Bus => &mut self.transport.bus,
            ConsumptionField::Flight => &mut self.transport.flight,
            ConsumptionField::Landfill => &mut self.waste.landfill_kg,
            ConsumptionField::Recycling => &mut self.waste.recycling_kg,
            ConsumptionField::Compost => &mut self.waste.compost_kg,
        };
        *slot = value;
    }

    /// Builder-style setter, handy for tests and benches.
    pub fn with(mut self, field: ConsumptionField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ConsumptionField::all().all(|field| self.get(field) == 0.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
