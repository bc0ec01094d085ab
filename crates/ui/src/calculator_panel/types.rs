//! Panel-local state and the actions the panel emits.

use std::collections::HashMap;

use bevy::prelude::*;

use estimator::input::parse_leading_number;
use estimator::{Category, ConsumptionField, ConsumptionInput, DistanceUnit};

use super::formatting::display_value;

/// Raw text of each input box. Kept separately from [`ConsumptionInput`] so
/// partially typed text (`"12."`, `"3e"`) survives between frames.
#[derive(Resource, Debug, Default)]
pub struct InputBuffers {
    text: HashMap<ConsumptionField, String>,
}

impl InputBuffers {
    pub fn text(&self, field: ConsumptionField) -> &str {
        self.text.get(&field).map_or("", String::as_str)
    }

    pub fn text_mut(&mut self, field: ConsumptionField) -> &mut String {
        self.text.entry(field).or_default()
    }

    /// Rewrite any box whose number differs from the stored value, e.g.
    /// after a unit toggle, a reset or a clamped negative. Boxes that already
    /// agree are untouched.
    pub fn sync_from(&mut self, input: &ConsumptionInput) {
        for field in ConsumptionField::all() {
            let stored = input.get(field);
            let text = self.text_mut(field);
            if parse_leading_number(text).unwrap_or(0.0) != stored {
                *text = display_value(stored);
            }
        }
    }
}

/// Something the user did in the panel this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    Edit { field: ConsumptionField, value: f64 },
    SetUnit(DistanceUnit),
    Select(Category),
    Reset,
}
