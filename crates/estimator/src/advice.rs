//! Static guidance shown alongside the results: reduction tips and the
//! reference links behind the factor table and scope policy.

use crate::shares::Scope;

/// Published UK conversion factors the canonical table is taken from.
pub const OFFICIAL_FACTORS_URL: &str =
    "https://www.gov.uk/government/publications/greenhouse-gas-reporting-conversion-factors-2025";

/// The corporate standard the scope split follows.
pub const GHG_PROTOCOL_URL: &str = "https://ghgprotocol.org/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionTip {
    pub title: &'static str,
    pub detail: &'static str,
    /// Scope the tip mainly lowers, when it targets one.
    pub scope: Option<Scope>,
}

pub const REDUCTION_TIPS: [ReductionTip; 4] = [
    ReductionTip {
        title: "Renewable Energy",
        detail: "Switch to green tariffs to cut Scope 2 emissions",
        scope: Some(Scope::Scope2),
    },
    ReductionTip {
        title: "Public Transport",
        detail: "Trains and buses emit less per passenger",
        scope: None,
    },
    ReductionTip {
        title: "Reduce & Recycle",
        detail: "Minimize landfill to cut Scope 3 emissions",
        scope: Some(Scope::Scope3),
    },
    ReductionTip {
        title: "Home Efficiency",
        detail: "Better insulation reduces energy use",
        scope: None,
    },
];
