//! Right side of the panel: totals, category bars, scope bars and detail
//! lines, the factor table in use, and the collapsible guidance sections.

use bevy_egui::egui;

use estimator::advice::{GHG_PROTOCOL_URL, OFFICIAL_FACTORS_URL, REDUCTION_TIPS};
use estimator::shares::Scope;
use estimator::{Category, ConversionFactors, EmissionResults};

use super::formatting::{bar_fraction, fmt_kg, fmt_pct};

// =============================================================================
// Colors
// =============================================================================

const COLOR_TOTAL: egui::Color32 = egui::Color32::from_rgb(120, 210, 150);
const COLOR_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 160, 165);
const COLOR_ENERGY: egui::Color32 = egui::Color32::from_rgb(80, 140, 230);
const COLOR_TRANSPORT: egui::Color32 = egui::Color32::from_rgb(80, 190, 110);
const COLOR_WASTE: egui::Color32 = egui::Color32::from_rgb(230, 180, 60);
const COLOR_SCOPE1: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);
const COLOR_SCOPE2: egui::Color32 = egui::Color32::from_rgb(240, 170, 60);
const COLOR_SCOPE3: egui::Color32 = egui::Color32::from_rgb(90, 170, 230);
const BAR_BG: egui::Color32 = egui::Color32::from_gray(40);

fn category_color(category: Category) -> egui::Color32 {
    match category {
        Category::Energy => COLOR_ENERGY,
        Category::Transport => COLOR_TRANSPORT,
        Category::Waste => COLOR_WASTE,
    }
}

fn scope_color(scope: Scope) -> egui::Color32 {
    match scope {
        Scope::Scope1 => COLOR_SCOPE1,
        Scope::Scope2 => COLOR_SCOPE2,
        Scope::Scope3 => COLOR_SCOPE3,
    }
}

// =============================================================================
// Sections
// =============================================================================

pub fn render_totals(ui: &mut egui::Ui, results: &EmissionResults) {
    ui.heading("Total Emissions");
    ui.label(
        egui::RichText::new(fmt_kg(results.total))
            .size(32.0)
            .color(COLOR_TOTAL),
    );
    ui.label("kg CO2e / month");
    ui.colored_label(
        COLOR_MUTED,
        format!("{} kg CO2e / year", fmt_kg(results.annual_total())),
    );
}

pub fn render_category_breakdown(ui: &mut egui::Ui, results: &EmissionResults) {
    ui.heading("Breakdown by Category");
    for category in Category::ALL {
        share_row(
            ui,
            category.name(),
            results.category_total(category),
            results.category_share(category),
            category_color(category),
        );
    }
}

pub fn render_scope_breakdown(ui: &mut egui::Ui, results: &EmissionResults) {
    ui.heading("GHG Protocol Scopes");
    for scope in Scope::ALL {
        ui.horizontal(|ui| {
            ui.colored_label(scope_color(scope), egui::RichText::new(scope.name()).strong());
            ui.colored_label(COLOR_MUTED, scope.description());
        });
        share_row(
            ui,
            "",
            results.scope_total(scope),
            results.scope_share(scope),
            scope_color(scope),
        );
        for line in results.scope_detail_lines(scope) {
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                ui.small(format!("{}: {} kg", line.label, fmt_kg(line.value)));
            });
        }
        ui.add_space(4.0);
    }
}

pub fn render_factor_source(ui: &mut egui::Ui, factors: &ConversionFactors) {
    ui.colored_label(
        COLOR_MUTED,
        egui::RichText::new(format!(
            "Factors: {} ({}), transport per {}",
            factors.version,
            factors.source,
            factors.distance_unit.label()
        ))
        .small(),
    );
    ui.hyperlink_to("View Official Factors", OFFICIAL_FACTORS_URL);
}

pub fn render_reduction_tips(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Quick Tips to Reduce Your Footprint")
        .default_open(false)
        .show(ui, |ui| {
            for tip in REDUCTION_TIPS {
                ui.horizontal_wrapped(|ui| {
                    match tip.scope {
                        Some(scope) => ui.colored_label(scope_color(scope), tip.title),
                        None => ui.strong(tip.title),
                    };
                    ui.colored_label(COLOR_MUTED, tip.detail);
                });
            }
        });
}

pub fn render_scope_guide(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Understanding GHG Scopes")
        .default_open(false)
        .show(ui, |ui| {
            for scope in Scope::ALL {
                ui.horizontal(|ui| {
                    let badge = egui::RichText::new(scope.name()).strong();
                    ui.colored_label(scope_color(scope), badge);
                    ui.strong(scope.description());
                });
                ui.label(egui::RichText::new(scope.explanation()).small());
                ui.add_space(4.0);
            }
            ui.horizontal_wrapped(|ui| {
                ui.small("Based on the");
                ui.hyperlink_to(egui::RichText::new("GHG Protocol").small(), GHG_PROTOCOL_URL);
                ui.small("Corporate Standard");
            });
        });
}

// =============================================================================
// Helpers
// =============================================================================

fn share_row(ui: &mut egui::Ui, label: &str, kg: f64, pct: f64, color: egui::Color32) {
    ui.horizontal(|ui| {
        if !label.is_empty() {
            ui.label(format!("{label}:"));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} kg ({})", fmt_kg(kg), fmt_pct(pct)));
        });
    });

    let width = ui.available_width().min(300.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 10.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, BAR_BG);
    let mut fill = rect;
    fill.set_right(rect.left() + rect.width() * bar_fraction(pct));
    painter.rect_filled(fill, 2.0, color);
}
