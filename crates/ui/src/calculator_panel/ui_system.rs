//! The calculator window system and event dispatch.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estimator::{
    CalculatorSettings, Category, ConsumptionInput, ConversionFactors, CurrentEmissions,
    ResetCalculator, SelectCategory, SetDistanceUnit, SetQuantity,
};

use super::types::{InputBuffers, PanelAction};
use super::{input_form, results_pane};

/// Keep input boxes in step with stored values changed outside the boxes.
pub fn sync_input_buffers(input: Res<ConsumptionInput>, mut buffers: ResMut<InputBuffers>) {
    if !input.is_changed() {
        return;
    }
    buffers.sync_from(&input);
}

/// Renders the calculator window and forwards user actions as events.
#[allow(clippy::too_many_arguments)]
pub fn calculator_panel_ui(
    mut contexts: EguiContexts,
    settings: Res<CalculatorSettings>,
    current: Res<CurrentEmissions>,
    factors: Res<ConversionFactors>,
    mut buffers: ResMut<InputBuffers>,
    mut edits: EventWriter<SetQuantity>,
    mut unit_changes: EventWriter<SetDistanceUnit>,
    mut selections: EventWriter<SelectCategory>,
    mut resets: EventWriter<ResetCalculator>,
) {
    let mut actions = Vec::new();

    egui::Window::new("Carbon Emissions Calculator")
        .default_open(true)
        .default_width(720.0)
        .resizable(true)
        .show(contexts.ctx_mut(), |ui| {
            ui.small("Monthly household consumption, GHG Protocol scopes");
            ui.separator();

            ui.columns(2, |cols| {
                let left = &mut cols[0];
                input_form::render_category_tabs(left, settings.active_category, &mut actions);
                left.separator();
                if settings.active_category == Category::Transport {
                    input_form::render_unit_toggle(left, settings.unit, &mut actions);
                    left.add_space(4.0);
                }
                input_form::render_fields(
                    left,
                    settings.active_category,
                    settings.unit,
                    &mut buffers,
                    &mut actions,
                );
                left.add_space(8.0);
                input_form::render_category_tip(left, settings.active_category);
                left.add_space(8.0);
                if left.button("Reset").clicked() {
                    actions.push(PanelAction::Reset);
                }

                let right = &mut cols[1];
                results_pane::render_totals(right, &current.0);
                right.separator();
                results_pane::render_category_breakdown(right, &current.0);
                right.separator();
                results_pane::render_scope_breakdown(right, &current.0);
                right.separator();
                results_pane::render_factor_source(right, &factors);
                right.separator();
                results_pane::render_reduction_tips(right);
                results_pane::render_scope_guide(right);
            });
        });

    for action in actions {
        match action {
            PanelAction::Edit { field, value } => {
                edits.send(SetQuantity { field, value });
            }
            PanelAction::SetUnit(unit) => {
                unit_changes.send(SetDistanceUnit(unit));
            }
            PanelAction::Select(category) => {
                selections.send(SelectCategory(category));
            }
            PanelAction::Reset => {
                resets.send(ResetCalculator);
            }
        }
    }
}
