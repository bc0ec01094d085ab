//! Calculator state and the event-driven command layer.
//!
//! Front-ends never mutate [`ConsumptionInput`] directly. They send events
//! ([`SetQuantity`], [`SetDistanceUnit`], [`SelectCategory`],
//! [`ResetCalculator`]) which are applied in `CalculatorSet::Input`, after
//! which [`recompute_emissions`] refreshes [`CurrentEmissions`] in
//! `CalculatorSet::Compute` within the same update.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aggregator::{compute_emissions, EmissionResults};
use crate::consumption::{Category, ConsumptionField, ConsumptionInput};
use crate::factors::ConversionFactors;
use crate::input::sanitize_quantity;
use crate::sets::CalculatorSet;
use crate::units::{convert_transport_units, DistanceUnit};

// =============================================================================
// Resources
// =============================================================================

/// Selector state: distance unit for transport inputs and the visible tab.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    pub unit: DistanceUnit,
    pub active_category: Category,
}

/// Results for the current input, refreshed whenever input, settings or the
/// factor table change.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrentEmissions(pub EmissionResults);

// =============================================================================
// Events
// =============================================================================

/// Set one consumption field. The value is sanitized before it is stored.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetQuantity {
    pub field: ConsumptionField,
    pub value: f64,
}

/// Switch the transport unit, converting the stored distances.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetDistanceUnit(pub DistanceUnit);

/// Change the visible category tab.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectCategory(pub Category);

/// Clear every field and restore selector defaults.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetCalculator;

/// Sent after each recomputation.
#[derive(Event, Debug, Clone, Copy)]
pub struct EmissionsUpdated {
    pub total: f64,
}

// =============================================================================
// Systems
// =============================================================================

pub fn apply_resets(
    mut events: EventReader<ResetCalculator>,
    mut input: ResMut<ConsumptionInput>,
    mut settings: ResMut<CalculatorSettings>,
) {
    if events.read().count() == 0 {
        return;
    }
    input.reset();
    *settings = CalculatorSettings::default();
    info!("Calculator reset: all quantities cleared, unit km, category energy");
}

pub fn apply_quantity_edits(
    mut events: EventReader<SetQuantity>,
    mut input: ResMut<ConsumptionInput>,
) {
    for ev in events.read() {
        let value = sanitize_quantity(ev.value);
        if value != ev.value {
            warn!(
                "SetQuantity {:?}: {} is not a valid quantity, storing {}",
                ev.field, ev.value, value
            );
        }
        if input.get(ev.field) == value {
            continue;
        }
        input.set(ev.field, value);
        debug!("{:?} = {}", ev.field, value);
    }
}

pub fn apply_unit_changes(
    mut events: EventReader<SetDistanceUnit>,
    mut input: ResMut<ConsumptionInput>,
    mut settings: ResMut<CalculatorSettings>,
) {
    for ev in events.read() {
        let from = settings.unit;
        let to = ev.0;
        if from == to {
            continue;
        }
        input.transport = convert_transport_units(&input.transport, from, to);
        settings.unit = to;
        info!(
            "Transport unit changed {} -> {}",
            from.label(),
            to.label()
        );
    }
}

pub fn apply_category_selection(
    mut events: EventReader<SelectCategory>,
    mut settings: ResMut<CalculatorSettings>,
) {
    // Only the last selection of the frame matters.
    if let Some(ev) = events.read().last() {
        if settings.active_category != ev.0 {
            settings.active_category = ev.0;
        }
    }
}

/// Recompute results if anything they depend on changed.
pub fn recompute_emissions(
    input: Res<ConsumptionInput>,
    settings: Res<CalculatorSettings>,
    factors: Res<ConversionFactors>,
    mut current: ResMut<CurrentEmissions>,
    mut updated: EventWriter<EmissionsUpdated>,
) {
    if !input.is_changed() && !settings.is_changed() && !factors.is_changed() {
        return;
    }
    current.0 = compute_emissions(&input, &factors, settings.unit);
    updated.send(EmissionsUpdated {
        total: current.0.total,
    });
}

// =============================================================================
// Plugin
// =============================================================================

pub struct CalculatorPlugin;

impl Plugin for CalculatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConsumptionInput>()
            .init_resource::<CalculatorSettings>()
            .init_resource::<ConversionFactors>()
            .init_resource::<CurrentEmissions>()
            .add_event::<SetQuantity>()
            .add_event::<SetDistanceUnit>()
            .add_event::<SelectCategory>()
            .add_event::<ResetCalculator>()
            .add_event::<EmissionsUpdated>()
            .add_systems(
                Update,
                (
                    apply_resets,
                    apply_quantity_edits,
                    apply_unit_changes,
                    apply_category_selection,
                )
                    .chain()
                    .in_set(CalculatorSet::Input),
            )
            .add_systems(Update, recompute_emissions.in_set(CalculatorSet::Compute));
    }
}

// =============================================================================
// Unit tests
// =============================================================================
