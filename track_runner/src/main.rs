use friction_track::*;
use std::env;

use tracing_subscriber::EnvFilter;

const MAX_FRAMES: usize = 100_000;

#[derive(Clone, Copy)]
struct Scenario {
    name: &'static str,
    initial_velocity: f64,
    friction: f64,
    frames: usize,
}

static SCENARIOS: [Scenario; 3] = [
    Scenario { name: "slide", initial_velocity: 5.0, friction: 0.5, frames: MAX_FRAMES },
    Scenario { name: "bounce", initial_velocity: 12.0, friction: 0.05, frames: MAX_FRAMES },
    Scenario { name: "frictionless", initial_velocity: 5.0, friction: 0.0, frames: 600 },
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let dump_json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| !a.starts_with("--")).collect();

    let scenario = match positional.as_slice() {
        [] => SCENARIOS[0],
        [name] => match SCENARIOS.iter().find(|s| s.name == name.as_str()) {
            Some(s) => *s,
            None => {
                let names: Vec<&str> = SCENARIOS.iter().map(|s| s.name).collect();
                eprintln!("Unknown scenario: {}. Available: {}, or <v0> <mu>", name, names.join(", "));
                std::process::exit(2);
            },
        },
        [v0, mu] => match (v0.parse::<f64>(), mu.parse::<f64>()) {
            (Ok(initial_velocity), Ok(friction)) => {
                Scenario { name: "custom", initial_velocity, friction, frames: MAX_FRAMES }
            },
            _ => {
                eprintln!("Expected numeric <v0> <mu>, got {} {}", v0, mu);
                std::process::exit(2);
            },
        },
        _ => {
            eprintln!("Usage: track_runner [slide|bounce|frictionless | <v0> <mu>] [--json]");
            std::process::exit(2);
        },
    };

    run(scenario, dump_json);
}

fn run(scenario: Scenario, dump_json: bool) {
    if let Err(e) = run_scenario(&scenario, dump_json) {
        tracing::error!(error = %e, scenario = scenario.name, "Simulation failed");
        std::process::exit(1);
    }
}

fn run_scenario(scenario: &Scenario, dump_json: bool) -> Result<(), SimulationError> {
    let config = SimulationConfig::load();
    let mut session = Session::new(config)?;
    session.start(scenario.initial_velocity)?;

    tracing::info!(
        scenario = scenario.name,
        v0 = scenario.initial_velocity,
        mu = scenario.friction,
        "Running scenario"
    );

    // One step per frame, as the animation loop would
    let mut frame = 0;
    while session.is_running() && frame < scenario.frames {
        session.step(scenario.friction)?;
        if frame % 30 == 0 {
            let state = session.state();
            tracing::info!(
                frame,
                t = state.time,
                x = state.position,
                v = state.velocity,
                px = session.track().to_pixels(state.position),
                energy = state.specific_kinetic_energy(),
                "Frame"
            );
        }
        frame += 1;
    }

    let state = session.state();
    let history = session.history();
    tracing::info!(
        frames = frame,
        time = state.time,
        position = state.position,
        samples = history.len(),
        segments = history.segment_count(),
        running = session.is_running(),
        "Scenario finished"
    );

    if dump_json {
        let vt_bounds = plot::chart::velocity_time_bounds(state.initial_velocity, state.time);
        let vx_bounds = plot::chart::velocity_position_bounds(state.initial_velocity, session.track().length);
        let colors: Vec<&str> = history.segments().iter().map(|s| session.segment_color(s)).collect();
        let output = serde_json::json!({
            "scenario": scenario.name,
            "state": state,
            "history": history,
            "segment_colors": colors,
            "charts": {
                "velocity_time": { "bounds": vt_bounds, "series": plot::chart::velocity_time_series(history) },
                "velocity_position": { "bounds": vx_bounds, "series": plot::chart::velocity_position_series(history) },
            },
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => tracing::error!(error = %e, "Failed to encode history"),
        }
    }

    Ok(())
}
