//! Number formatting for the calculator panel.

/// Emission mass with two decimals, e.g. `"74.32"`.
pub fn fmt_kg(kg: f64) -> String {
    format!("{:.2}", kg)
}

/// A percentage already scaled to 0..100, e.g. `"42.5%"`.
pub fn fmt_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Text shown in an input box for a stored quantity. Zero shows as empty so
/// the placeholder is visible.
pub fn display_value(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{}", value)
    }
}

/// Placeholder text for an empty input box.
pub fn example_hint(example: f64) -> String {
    format!("e.g., {}", example)
}

/// Fraction of a progress bar to fill for a percentage share.
pub fn bar_fraction(pct: f64) -> f32 {
    (pct / 100.0).clamp(0.0, 1.0) as f32
}
