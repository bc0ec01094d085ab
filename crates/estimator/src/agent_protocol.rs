//! Agent text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that scripts and test
//! harnesses use to drive the calculator over newline-delimited JSON on
//! stdin/stdout.
//!
//! These types live in the `estimator` crate so they can be unit-tested
//! without pulling in the app binary. The I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::aggregator::EmissionResults;
use crate::consumption::{Category, ConsumptionField};
use crate::factors::ConversionFactors;
use crate::shares::Scope;
use crate::units::DistanceUnit;

// ---------------------------------------------------------------------------
// Commands (stdin → calculator)
// ---------------------------------------------------------------------------

/// A single command sent over stdin. The `cmd` field is the discriminator.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Set one consumption field. Distances are in the currently selected unit.
    #[serde(rename = "set")]
    Set { field: ConsumptionField, value: f64 },

    /// Switch the transport unit, converting stored distances.
    #[serde(rename = "set_unit")]
    SetUnit { unit: DistanceUnit },

    #[serde(rename = "select_category")]
    SelectCategory { category: Category },

    /// Clear all inputs and restore unit/category defaults.
    #[serde(rename = "reset")]
    Reset,

    /// Request the current results snapshot.
    #[serde(rename = "results")]
    Results,

    /// Request the active factor table.
    #[serde(rename = "factors")]
    Factors,

    /// Gracefully shut down the agent session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (calculator → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "results")]
    Results(ResultsReport),

    #[serde(rename = "factors")]
    Factors { factors: ConversionFactors },

    #[serde(rename = "ok")]
    Ok,

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Percentages of the monthly total, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShares {
    pub energy: f64,
    pub transport: f64,
    pub waste: f64,
}

/// Percentages of the monthly total, one per scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScopeShares {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

/// Body of a `results` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsReport {
    pub unit: DistanceUnit,
    pub results: EmissionResults,
    pub annual_total: f64,
    pub category_shares: CategoryShares,
    pub scope_shares: ScopeShares,
}

impl ResultsReport {
    pub fn new(results: &EmissionResults, unit: DistanceUnit) -> Self {
        Self {
            unit,
            results: *results,
            annual_total: results.annual_total(),
            category_shares: CategoryShares {
                energy: results.category_share(Category::Energy),
                transport: results.category_share(Category::Transport),
                waste: results.category_share(Category::Waste),
            },
            scope_shares: ScopeShares {
                scope1: results.scope_share(Scope::Scope1),
                scope2: results.scope_share(Scope::Scope2),
                scope3: results.scope_share(Scope::Scope3),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Wraps a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
