//! Carbon calculator window.
//!
//! | Column | Contents                                                        |
//! |--------|-----------------------------------------------------------------|
//! | Left   | Category tabs, km/miles toggle (transport), input boxes, tip    |
//! | Right  | Totals, category and scope bars, factor links, tips, scope guide|
//!
//! The panel only sends events; results are read back from
//! [`estimator::CurrentEmissions`].

mod formatting;
mod input_form;
mod results_pane;
pub mod types;
mod ui_system;

use bevy::prelude::*;
use estimator::CalculatorSet;

pub use formatting::{display_value, fmt_kg, fmt_pct};
pub use types::{InputBuffers, PanelAction};
pub use ui_system::{calculator_panel_ui, sync_input_buffers};

pub struct CalculatorPanelPlugin;

impl Plugin for CalculatorPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBuffers>()
            .add_systems(Update, calculator_panel_ui.before(CalculatorSet::Input))
            .add_systems(Update, sync_input_buffers.after(CalculatorSet::Compute));
    }
}
