//! Left side of the panel: category tabs, the unit toggle and input boxes.

use bevy_egui::egui;

use estimator::input::parse_quantity;
use estimator::{Category, ConsumptionField, DistanceUnit};

use super::formatting::example_hint;
use super::types::{InputBuffers, PanelAction};

const HINT_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 160, 165);
const FIELD_WIDTH: f32 = 140.0;
const TIP_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 210, 150);

pub fn render_category_tabs(ui: &mut egui::Ui, active: Category, actions: &mut Vec<PanelAction>) {
    ui.horizontal(|ui| {
        for category in Category::ALL {
            if ui
                .selectable_label(active == category, category.name())
                .clicked()
                && active != category
            {
                actions.push(PanelAction::Select(category));
            }
        }
    });
}

/// km / miles toggle. Switching converts the values already entered.
pub fn render_unit_toggle(ui: &mut egui::Ui, unit: DistanceUnit, actions: &mut Vec<PanelAction>) {
    ui.horizontal(|ui| {
        ui.label("Distance unit:");
        for option in [DistanceUnit::Km, DistanceUnit::Miles] {
            if ui.selectable_label(unit == option, option.label()).clicked() && unit != option {
                actions.push(PanelAction::SetUnit(option));
            }
        }
    });
}

pub fn render_fields(
    ui: &mut egui::Ui,
    category: Category,
    unit: DistanceUnit,
    buffers: &mut InputBuffers,
    actions: &mut Vec<PanelAction>,
) {
    egui::Grid::new("calculator_fields")
        .num_columns(3)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            for &field in category.fields() {
                field_row(ui, field, unit, buffers, actions);
                ui.end_row();
            }
        });
}

/// Advice box under the input grid for the visible category.
pub fn render_category_tip(ui: &mut egui::Ui, category: Category) {
    let (heading, body) = category.tip();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.colored_label(TIP_COLOR, egui::RichText::new(heading).strong());
        ui.label(egui::RichText::new(body).small());
    });
}

fn field_row(
    ui: &mut egui::Ui,
    field: ConsumptionField,
    unit: DistanceUnit,
    buffers: &mut InputBuffers,
    actions: &mut Vec<PanelAction>,
) {
    ui.vertical(|ui| {
        ui.strong(field.label());
        ui.colored_label(HINT_COLOR, egui::RichText::new(field.hint()).small());
    });

    let text = buffers.text_mut(field);
    let response = ui.add(
        egui::TextEdit::singleline(&mut *text)
            .desired_width(FIELD_WIDTH)
            .hint_text(example_hint(field.example())),
    );
    if response.changed() {
        actions.push(PanelAction::Edit {
            field,
            value: parse_quantity(text),
        });
    }

    ui.label(field.fixed_unit().unwrap_or(unit.label()));
}
