mod cli;

#[cfg(not(target_arch = "wasm32"))]
mod agent_mode;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use clap::Parser;

use estimator::ConversionFactors;

use cli::CliArgs;

fn main() {
    let args = CliArgs::parse();

    if args.agent {
        run_agent(&args);
        return;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Carbon Emissions Calculator".to_string(),
            resolution: (1100.0, 760.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(250)),
    });

    if let Some(path) = &args.factors {
        match ConversionFactors::from_json_file(path) {
            Ok(factors) => {
                info!("Loaded factor table from {}", path.display());
                app.insert_resource(factors);
            }
            Err(e) => warn!(
                "Could not load factors from {}: {e}; using the built-in table",
                path.display()
            ),
        }
    }

    app.add_plugins((estimator::EstimatorPlugin, ui::UiPlugin))
        .add_systems(Startup, spawn_camera);

    app.run();
}

/// Headless mode. A factor file that fails to load ends the process with
/// status 1 before the `ready` line is written.
#[cfg(not(target_arch = "wasm32"))]
fn run_agent(args: &CliArgs) {
    let factors = match &args.factors {
        Some(path) => match ConversionFactors::from_json_file(path) {
            Ok(factors) => factors,
            Err(e) => {
                eprintln!("failed to load factors from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => ConversionFactors::default(),
    };
    agent_mode::run_agent_mode(factors);
}

#[cfg(target_arch = "wasm32")]
fn run_agent(_args: &CliArgs) {
    error!("--agent needs stdin/stdout and is not available in the browser build");
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
