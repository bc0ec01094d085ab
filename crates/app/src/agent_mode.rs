//! Headless `--agent` mode: a blocking loop that reads JSON commands from
//! stdin and writes JSON responses to stdout.
//!
//! When `--agent` is passed the window, renderer and egui are never built;
//! the calculator runs on `MinimalPlugins` and each mutating command is
//! followed by one `app.update()` so results are current before the next
//! line is read.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`estimator::agent_protocol`] for the full schema.
//! Diagnostics go to stderr only.

use std::io::{BufRead, Write};

use bevy::prelude::*;

use estimator::agent_protocol::{
    make_response, AgentCommand, AgentResponse, ResponsePayload, ResultsReport, PROTOCOL_VERSION,
};
use estimator::{
    CalculatorSettings, ConversionFactors, CurrentEmissions, ResetCalculator, SelectCategory,
    SetDistanceUnit, SetQuantity,
};

pub fn run_agent_mode(factors: ConversionFactors) {
    // -- Headless app: estimator only ----------------------------------------
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(factors);
    app.add_plugins(estimator::EstimatorPlugin);

    // Initial update so the first results are computed.
    app.update();

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_response(&mut stdout, &make_response(ResponsePayload::Ready));

    let version = &app.world().resource::<ConversionFactors>().version;
    eprintln!(
        "carbon-calculator agent mode v{PROTOCOL_VERSION} ready (factors {version}), waiting for commands on stdin"
    );

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AgentCommand>(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    eprintln!("carbon-calculator agent mode shutting down");
}

fn write_response(out: &mut impl Write, response: &AgentResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let _ = writeln!(out, "{json}");
            let _ = out.flush();
        }
        Err(e) => eprintln!("failed to encode response: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Set { field, value } => {
            app.world_mut().send_event(SetQuantity { field, value });
            app.update();
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::SetUnit { unit } => {
            app.world_mut().send_event(SetDistanceUnit(unit));
            app.update();
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::SelectCategory { category } => {
            app.world_mut().send_event(SelectCategory(category));
            app.update();
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::Reset => {
            app.world_mut().send_event(ResetCalculator);
            app.update();
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::Results => {
            let results = app.world().resource::<CurrentEmissions>().0;
            let unit = app.world().resource::<CalculatorSettings>().unit;
            make_response(ResponsePayload::Results(ResultsReport::new(&results, unit)))
        }

        AgentCommand::Factors => {
            let factors = app.world().resource::<ConversionFactors>().clone();
            make_response(ResponsePayload::Factors { factors })
        }

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator::ConsumptionField;

    fn agent_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(estimator::EstimatorPlugin);
        app.update();
        app
    }

    fn run(app: &mut App, line: &str) -> serde_json::Value {
        let cmd: AgentCommand = serde_json::from_str(line).unwrap();
        serde_json::to_value(process_command(cmd, app)).unwrap()
    }

    #[test]
    fn test_set_then_results() {
        let mut app = agent_app();
        assert_eq!(
            run(&mut app, r#"{"cmd":"set","field":"natural_gas","value":500}"#)["type"],
            "ok"
        );
        let v = run(&mut app, r#"{"cmd":"results"}"#);
        let scope1 = v["results"]["scopes"]["scope1"].as_f64().unwrap();
        assert!((scope1 - 500.0 * 0.18316).abs() < 1e-9);
        assert_eq!(v["unit"], "km");
    }

    #[test]
    fn test_set_unit_converts_stored_distance() {
        let mut app = agent_app();
        run(&mut app, r#"{"cmd":"set","field":"bus","value":10}"#);
        run(&mut app, r#"{"cmd":"set_unit","unit":"miles"}"#);
        let input = app.world().resource::<estimator::ConsumptionInput>();
        assert_eq!(input.get(ConsumptionField::Bus), 6.21);
    }

    #[test]
    fn test_quit_says_goodbye() {
        let mut app = agent_app();
        assert_eq!(run(&mut app, r#"{"cmd":"quit"}"#)["type"], "goodbye");
    }

    #[test]
    fn test_write_response_is_one_line() {
        let mut out = Vec::new();
        write_response(&mut out, &make_response(ResponsePayload::Ok));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
        assert!(text.contains(r#""type":"ok""#));
    }
}
