/// Miles per kilometre.
pub const KM_TO_MILES: f64 = 0.621371;
/// Kilometres per mile.
pub const MILES_TO_KM: f64 = 1.60934;

/// Decimal places kept when the unit selector converts stored distances.
pub const UNIT_TOGGLE_DECIMALS: i32 = 2;

/// Inputs are monthly figures; annual totals multiply by this.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Kilograms per tonne, used when rescaling published per-tonne waste factors.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Tolerance for the scope/category cross-check.
pub const ADDITIVITY_TOLERANCE: f64 = 1e-9;
