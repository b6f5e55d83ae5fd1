//! Interactive Storm Simulation Demo
//!
//! A terminal version of the storm-alert dashboard. Move the time slider,
//! switch towns and press the manual alert buttons from a prompt.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package storm-sim-interactive -- [--config <path>]
//! ```
//!
//! # Commands
//!
//! - `hour <h>` - Move the slider to hour h (e.g. 15.5)
//! - `next [step]` - Advance the slider by step hours (default 0.5)
//! - `status` - Show the telemetry panel
//! - `location <name>` - Switch town (full or short name)
//! - `locations` - List towns in selector order
//! - `alert <clear|yellow|orange>` - Press a manual alert button
//! - `bulletin <yellow|orange> [name]` - Show the bulletin text the backend would send
//! - `forecast` - Show the seven-day outlook
//! - `timeline [step]` - Show the whole day
//! - `pattern` - Show today's storm scenario
//! - `newday [seed]` - Generate a new storm day
//! - `outlook [runs]` - Alert probabilities over many simulated days
//! - `help` - Show available commands
//! - `quit` - Exit the simulation

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use storm_sim_core::clock::{format_hour, MIN_SLIDER_STEP};
use storm_sim_core::{AlertTier, Readout, Session, SimulationConfig};
use tracing_subscriber::EnvFilter;

/// Slider step used by `next` and `timeline` without an argument
const DEFAULT_STEP: f64 = 0.5;

/// Days simulated by `outlook` without an argument
const DEFAULT_RUNS: u32 = 1000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║        Storm Alert Simulation - Interactive Dashboard     ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let mut session = match Session::from_config(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start session: {e}");
            return;
        }
    };

    show_pattern(&session);
    show_status(&session);

    // Setup readline
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {}", e);
            return;
        }
    };

    println!("Type 'help' for available commands.\n");

    loop {
        let readline = rl.readline("storm> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let parts: Vec<&str> = line.split_whitespace().collect();

                if parts.is_empty() {
                    continue;
                }

                match parts[0].to_lowercase().as_str() {
                    "hour" | "h" => {
                        let Some(hour) = parts.get(1).and_then(|s| s.parse::<f64>().ok()) else {
                            println!("Usage: hour <h>  (0-24, e.g. 15.5)");
                            continue;
                        };
                        set_hour(&mut session, hour);
                    }
                    "next" | "n" => {
                        let step = parts
                            .get(1)
                            .and_then(|s| s.parse::<f64>().ok())
                            .unwrap_or(DEFAULT_STEP);
                        let target = session.hour() + step;
                        set_hour(&mut session, target);
                    }
                    "status" | "st" => show_status(&session),
                    "location" | "loc" | "l" => {
                        if parts.len() < 2 {
                            println!("Usage: location <name>");
                            continue;
                        }
                        let query = parts[1..].join(" ");
                        let found = session.registry().find(&query).map(str::to_string);
                        if let Some(name) = found {
                            session.set_location(&name);
                            println!("Location set to {}", session.location());
                            show_status(&session);
                        } else {
                            println!("Unknown location '{}'. Type 'locations' to list towns.", query);
                        }
                    }
                    "locations" | "ls" => show_locations(&session),
                    "alert" | "a" => {
                        let Some(level) = parts.get(1).and_then(|s| s.parse::<AlertTier>().ok())
                        else {
                            println!("Usage: alert <clear|yellow|orange>");
                            continue;
                        };
                        press_alert(&session, level);
                    }
                    "bulletin" | "b" => {
                        let Some(level) = parts.get(1).and_then(|s| s.parse::<AlertTier>().ok())
                        else {
                            println!("Usage: bulletin <yellow|orange> [name]");
                            continue;
                        };
                        let name = parts.get(2..).map(|rest| rest.join(" "));
                        show_bulletin(&session, level, name.as_deref());
                    }
                    "forecast" | "f" => show_forecast(&session),
                    "timeline" | "t" => {
                        let step = parts
                            .get(1)
                            .and_then(|s| s.parse::<f64>().ok())
                            .unwrap_or(DEFAULT_STEP);
                        show_timeline(&session, step);
                    }
                    "pattern" | "p" => show_pattern(&session),
                    "newday" | "nd" => {
                        if let Some(seed) = parts.get(1).and_then(|s| s.parse::<u64>().ok()) {
                            session.regenerate(&mut StdRng::seed_from_u64(seed));
                        } else {
                            session.regenerate(&mut rand::rng());
                        }
                        show_pattern(&session);
                        show_status(&session);
                    }
                    "outlook" | "o" => {
                        let runs = parts
                            .get(1)
                            .and_then(|s| s.parse::<u32>().ok())
                            .unwrap_or(DEFAULT_RUNS);
                        show_outlook(&session, runs);
                    }
                    "help" | "?" => show_help(),
                    "quit" | "q" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => println!(
                        "Unknown command: {}. Type 'help' for available commands.",
                        parts[0]
                    ),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }
}

/// Read `--config <path>` from the command line, defaults otherwise
fn load_config() -> Result<SimulationConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let Some(path) = args.get(i + 1) else {
                return Err("Usage: storm-sim-interactive [--config <path>]".to_string());
            };
            let config = SimulationConfig::load(path).map_err(|e| e.to_string())?;
            println!("Loaded config from {}", path);
            Ok(config)
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn set_hour(session: &mut Session, hour: f64) {
    match session.set_hour(hour) {
        Ok(_) => show_status(session),
        Err(e) => println!("{e}"),
    }
}

fn show_status(session: &Session) {
    let readout = session.readout();
    let meter_width = (readout.meter_percent / 5) as usize;

    println!("\n═══════════════ {} ═══════════════", session.location());
    println!("Time:            {}", session.clock_label());
    println!("Wind Speed:      {}", readout.wind);
    println!("Rainfall:        {}", readout.rainfall);
    println!(
        "Lightning:       {} [{:<20}]",
        readout.lightning,
        "█".repeat(meter_width)
    );
    println!("Status:          {}", readout.badge);
    println!("Rain Layer:      {:.0}%", readout.rain_opacity * 100.0);
    println!("══════════════════════════════════════════════════\n");
}

fn show_locations(session: &Session) {
    println!("\nLocations:");
    for name in session.registry().selector_order() {
        let marker = if name == session.location() { "▶" } else { " " };
        let profile = session.registry().profile(name);
        println!(
            " {} {:<28} {:>4} {:<14} {}",
            marker, name, profile.base_temperature, profile.base_condition, profile.base_wind
        );
    }
    println!();
}

fn press_alert(session: &Session, level: AlertTier) {
    let alert = session.manual_alert(level);

    println!("\n┌─ {} ─", alert.dialog.title);
    println!("│ {}", alert.dialog.message);
    println!("│ Sound: {:?}", alert.dialog.sound);
    println!(
        "│ Rain layer {:.0}%, lightning flash {}, storm marker {}",
        alert.effects.rain_opacity * 100.0,
        if alert.effects.lightning_flash { "on" } else { "off" },
        alert
            .effects
            .storm_marker
            .map_or("none", AlertTier::as_str)
    );
    match &alert.request {
        Some(request) => println!(
            "│ POST /api/trigger-alert {{\"level\": \"{}\", \"location\": \"{}\"}}",
            request.level, request.location
        ),
        None => println!("│ Visuals handed back to the time slider"),
    }
    println!("└─\n");
}

fn show_bulletin(session: &Session, level: AlertTier, name: Option<&str>) {
    let Some(bulletin) = session.bulletin(level) else {
        println!("No bulletin is sent for a clear alert.");
        return;
    };

    println!("\nSubject: {}\n", bulletin.subject);
    match name {
        Some(name) if !name.is_empty() => println!("{}", bulletin.personalize(name)),
        _ => println!("{}", bulletin.body),
    }
    println!();
}

fn show_forecast(session: &Session) {
    println!("\n7-day outlook for {}:", session.location());
    for day in session.forecast(&mut rand::rng()) {
        println!("  {}", day.label());
    }
    println!();
}

fn show_timeline(session: &Session, step: f64) {
    let timeline = session.timeline(step);
    if timeline.is_empty() {
        println!("Step must be at least one minute ({:.4} h)", MIN_SLIDER_STEP);
        return;
    }

    println!();
    for (hour, state) in timeline {
        let readout = Readout::from_state(&state);
        let marker = if hour == session.hour() { "▶" } else { " " };
        println!(
            "{} {:>9}  {:>10}  {:>9}  {:>15}  {}",
            marker,
            format_hour(hour),
            readout.wind,
            readout.rainfall,
            readout.lightning,
            readout.badge
        );
    }
    println!();
}

fn show_pattern(session: &Session) {
    let pattern = session.pattern();
    println!("\n═══════════════ TODAY'S STORM ═══════════════");
    match session.storm_window() {
        Some((start, end)) => {
            println!("Peak:            {}", format_hour(pattern.storm_peak_hour()));
            println!("Wind Bonus:      +{} km/h", pattern.max_wind_bonus());
            println!("Window:          {:.1}h - {:.1}h", start, end);
        }
        None => println!("No storm today"),
    }
    println!("═════════════════════════════════════════════\n");
}

fn show_outlook(session: &Session, runs: u32) {
    let outlook = match session.outlook(runs, 0, DEFAULT_STEP) {
        Ok(outlook) => outlook,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    println!("\nAlert outlook for {} ({} days):", session.location(), runs);
    for (i, hour) in outlook.hours().iter().enumerate() {
        let risk = outlook.probability_at_least(i, AlertTier::Yellow);
        if risk > 0.0 {
            println!(
                "  {:>9}  yellow {:>5.1}%  orange {:>5.1}%",
                format_hour(*hour),
                outlook.probability(i, AlertTier::Yellow) * 100.0,
                outlook.probability(i, AlertTier::Orange) * 100.0
            );
        }
    }
    if outlook.peak_risk().is_none() {
        println!("  No alerts in any simulated day");
    }
    println!();
}

fn show_help() {
    println!("\n═══════════════ AVAILABLE COMMANDS ═══════════════");
    println!("  hour <h>, h          - Move the slider to hour h (0-24)");
    println!("  next [step], n       - Advance the slider (default 0.5h)");
    println!("  status, st           - Show the telemetry panel");
    println!("  location <name>, loc - Switch town (full or short name)");
    println!("  locations, ls        - List towns");
    println!("  alert <level>, a     - Press a manual alert (clear, yellow, orange)");
    println!("  bulletin <level> [name], b - Show bulletin text");
    println!("  forecast, f          - Seven-day outlook");
    println!("  timeline [step], t   - Show the whole day");
    println!("  pattern, p           - Show today's storm");
    println!("  newday [seed], nd    - Generate a new storm day");
    println!("  outlook [runs], o    - Alert probabilities over many days");
    println!("  help, ?              - Show this help");
    println!("  quit, q              - Exit");
    println!("══════════════════════════════════════════════════\n");
}
