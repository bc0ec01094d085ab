//! Update ordering for the calculator.
//!
//! ```text
//! Input  →  Compute
//! ```
//!
//! * **Input** – Apply front-end events (resets, quantity edits, unit toggles,
//!   tab selection) to the calculator resources.
//! * **Compute** – Recompute [`crate::calculator::CurrentEmissions`] from the
//!   updated resources. Front-ends that read results should run after this set
//!   or read them on the next frame.

use bevy::prelude::*;

/// Ordered phases for calculator systems in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Compute`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalculatorSet {
    Input,
    Compute,
}
