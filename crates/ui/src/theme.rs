use bevy_egui::{egui, EguiContexts};

// Slate panels with a leaf-green accent.
const PANEL: egui::Color32 = egui::Color32::from_rgb(30, 36, 38);
const INACTIVE: egui::Color32 = egui::Color32::from_rgb(46, 56, 58);
const HOVER: egui::Color32 = egui::Color32::from_rgb(60, 84, 78);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(86, 176, 120);
const FIELD_BG: egui::Color32 = egui::Color32::from_rgb(22, 27, 29);

pub fn apply_calculator_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let widgets = &mut style.visuals.widgets;
    widgets.noninteractive.bg_fill = PANEL;
    for (state, fill) in [
        (&mut widgets.inactive, INACTIVE),
        (&mut widgets.hovered, HOVER),
        (&mut widgets.active, ACCENT),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
    }

    style.visuals.window_fill = PANEL;
    style.visuals.panel_fill = PANEL;
    // Text edits draw on extreme_bg_color.
    style.visuals.extreme_bg_color = FIELD_BG;
    style.visuals.faint_bg_color = INACTIVE;

    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    // egui 0.31+ takes u8 corner radii
    style.visuals.window_corner_radius = egui::CornerRadius::same(10);
    let widget_radius = egui::CornerRadius::same(4);
    for state in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        state.corner_radius = widget_radius;
    }

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}
