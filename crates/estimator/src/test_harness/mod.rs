//! # TestCalculator: headless harness for calculator integration tests
//!
//! Wraps `bevy::app::App` + `EstimatorPlugin` so tests drive the calculator
//! through the same events a front-end sends, then assert on the resources.

use bevy::app::App;
use bevy::prelude::*;

use crate::aggregator::EmissionResults;
use crate::calculator::{
    CalculatorSettings, CurrentEmissions, EmissionsUpdated, ResetCalculator, SelectCategory,
    SetDistanceUnit, SetQuantity,
};
use crate::consumption::{Category, ConsumptionField, ConsumptionInput};
use crate::factors::ConversionFactors;
use crate::units::DistanceUnit;
use crate::EstimatorPlugin;

/// Records every `EmissionsUpdated` total so tests can count recomputations.
#[derive(Resource, Default)]
pub struct UpdateLog(pub Vec<f64>);

fn record_updates(mut events: EventReader<EmissionsUpdated>, mut log: ResMut<UpdateLog>) {
    for ev in events.read() {
        log.0.push(ev.total);
    }
}

pub struct TestCalculator {
    app: App,
}

impl Default for TestCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCalculator {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Calculator with the canonical factor table and empty input.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Calculator using `factors` instead of the canonical table.
    pub fn with_factors(factors: ConversionFactors) -> Self {
        Self::build(Some(factors))
    }

    fn build(factors: Option<ConversionFactors>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if let Some(factors) = factors {
            app.insert_resource(factors);
        }
        app.add_plugins(EstimatorPlugin);
        app.init_resource::<UpdateLog>();
        app.add_systems(Update, record_updates.after(crate::CalculatorSet::Compute));
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Actions (each runs one update)
    // -----------------------------------------------------------------------

    pub fn set(&mut self, field: ConsumptionField, value: f64) -> &mut Self {
        self.app
            .world_mut()
            .send_event(SetQuantity { field, value });
        self.update()
    }

    /// Set several fields in a single update.
    pub fn set_many(&mut self, values: &[(ConsumptionField, f64)]) -> &mut Self {
        for &(field, value) in values {
            self.app
                .world_mut()
                .send_event(SetQuantity { field, value });
        }
        self.update()
    }

    pub fn set_unit(&mut self, unit: DistanceUnit) -> &mut Self {
        self.app.world_mut().send_event(SetDistanceUnit(unit));
        self.update()
    }

    pub fn select(&mut self, category: Category) -> &mut Self {
        self.app.world_mut().send_event(SelectCategory(category));
        self.update()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.app.world_mut().send_event(ResetCalculator);
        self.update()
    }

    pub fn install_factors(&mut self, factors: ConversionFactors) -> &mut Self {
        self.app.world_mut().insert_resource(factors);
        self.update()
    }

    pub fn update(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn results(&self) -> EmissionResults {
        self.app.world().resource::<CurrentEmissions>().0
    }

    pub fn input(&self) -> ConsumptionInput {
        *self.app.world().resource::<ConsumptionInput>()
    }

    pub fn settings(&self) -> CalculatorSettings {
        *self.app.world().resource::<CalculatorSettings>()
    }

    pub fn factors(&self) -> &ConversionFactors {
        self.app.world().resource::<ConversionFactors>()
    }

    /// Totals reported by `EmissionsUpdated`, oldest first.
    pub fn update_log(&self) -> &[f64] {
        &self.app.world().resource::<UpdateLog>().0
    }

    pub fn app(&mut self) -> &mut App {
        &mut self.app
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the monthly total is within `tol` of `expected`.
    pub fn assert_total(&self, expected: f64, tol: f64) -> &Self {
        let total = self.results().total;
        assert!(
            (total - expected).abs() <= tol,
            "expected total {expected}, got {total}"
        );
        self
    }

    /// Assert scope totals equal category totals.
    pub fn assert_additive(&self) -> &Self {
        let r = self.results();
        let diff = (r.scopes.sum() - r.breakdown.sum()).abs();
        assert!(
            diff <= crate::config::ADDITIVITY_TOLERANCE,
            "scopes {:?} vs breakdown {:?} differ by {diff}",
            r.scopes,
            r.breakdown
        );
        self
    }
}
