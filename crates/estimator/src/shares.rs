//! Display-side derivations of [`EmissionResults`]: annualised totals,
//! percentage shares and the per-source detail lines shown under each scope.

use serde::{Deserialize, Serialize};

use crate::aggregator::EmissionResults;
use crate::config::MONTHS_PER_YEAR;
use crate::consumption::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Scope1,
    Scope2,
    Scope3,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    pub fn name(self) -> &'static str {
        match self {
            Scope::Scope1 => "Scope 1",
            Scope::Scope2 => "Scope 2",
            Scope::Scope3 => "Scope 3",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scope::Scope1 => "Direct Emissions",
            Scope::Scope2 => "Purchased Energy",
            Scope::Scope3 => "Value Chain",
        }
    }

    /// What kind of emission falls under the scope, in plain words.
    pub fn explanation(self) -> &'static str {
        match self {
            Scope::Scope1 => {
                "From sources you own or control: company vehicles, fuel combustion in \
                 owned facilities"
            }
            Scope::Scope2 => {
                "Indirect emissions from electricity, steam, heating/cooling you purchase"
            }
            Scope::Scope3 => {
                "All other indirect emissions: business travel, employee commuting, waste, \
                 purchased goods"
            }
        }
    }
}

/// One labelled contributor to a scope total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: f64,
}

/// `part / total` as a percentage; 0 when `total` is zero so displays never
/// see NaN or infinity.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    let pct = part / total * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

impl EmissionResults {
    /// Monthly total scaled to a year.
    pub fn annual_total(&self) -> f64 {
        self.total * MONTHS_PER_YEAR
    }

    pub fn category_total(&self, category: Category) -> f64 {
        match category {
            Category::Energy => self.breakdown.energy,
            Category::Transport => self.breakdown.transport,
            Category::Waste => self.breakdown.waste,
        }
    }

    pub fn scope_total(&self, scope: Scope) -> f64 {
        match scope {
            Scope::Scope1 => self.scopes.scope1,
            Scope::Scope2 => self.scopes.scope2,
            Scope::Scope3 => self.scopes.scope3,
        }
    }

    pub fn category_share(&self, category: Category) -> f64 {
        percent_of(self.category_total(category), self.total)
    }

    pub fn scope_share(&self, scope: Scope) -> f64 {
        percent_of(self.scope_total(scope), self.total)
    }

    /// Every contributor to `scope`, including zero-valued ones.
    pub fn scope_details_of(&self, scope: Scope) -> Vec<DetailLine> {
        let d = &self.scope_details;
        match scope {
            Scope::Scope1 => vec![
                DetailLine {
                    label: "Natural Gas",
                    value: d.scope1.natural_gas,
                },
                DetailLine {
                    label: "Heating Oil",
                    value: d.scope1.heating,
                },
                DetailLine {
                    label: "Owned Vehicles",
                    value: d.scope1.owned_vehicles,
                },
            ],
            Scope::Scope2 => vec![DetailLine {
                label: "Grid Electricity",
                value: d.scope2.electricity,
            }],
            Scope::Scope3 => vec![
                DetailLine {
                    label: "Public Transport",
                    value: d.scope3.public_transport,
                },
                DetailLine {
                    label: "Air Travel",
                    value: d.scope3.flights,
                },
                DetailLine {
                    label: "Electric Vehicles",
                    value: d.scope3.electric_vehicles,
                },
                DetailLine {
                    label: "Waste",
                    value: d.scope3.waste,
                },
            ],
        }
    }

    /// Detail lines to display under `scope`: only strictly positive ones,
    /// and none at all unless the scope total itself is positive.
    pub fn scope_detail_lines(&self, scope: Scope) -> Vec<DetailLine> {
        if self.scope_total(scope) <= 0.0 {
            return Vec::new();
        }
        self.scope_details_of(scope)
            .into_iter()
            .filter(|line| line.value > 0.0)
            .collect()
    }
}
