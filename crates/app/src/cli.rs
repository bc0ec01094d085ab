//! Command-line flags: `carbon-calculator [--agent] [--factors PATH]`.

use clap::Parser;
use std::path::PathBuf;

/// Carbon Emissions Calculator
///
/// Monthly and annual CO2e from household energy, transport and waste,
/// split into GHG Protocol scopes.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "carbon-calculator")]
#[command(version)]
#[command(about = "Carbon Emissions Calculator")]
pub struct CliArgs {
    /// Run the headless JSON-lines loop instead of opening a window.
    #[arg(long)]
    pub agent: bool,

    /// Factor table to use instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub factors: Option<PathBuf>,
}
