use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use storm_sim_core::clock::{format_hour, MIN_SLIDER_STEP};
use storm_sim_core::{
    AlertTier, DailyPattern, Readout, Session, SessionError, SimulationConfig,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Storm simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "storm-sim-headless")]
#[command(about = "Prints a simulated storm day for one location", long_about = None)]
struct Args {
    /// Location name, full or short (e.g. "Cebu City")
    #[arg(short, long)]
    location: Option<String>,

    /// Seed for the storm generator (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Force the storm to peak at this hour instead of generating one
    #[arg(short, long)]
    peak: Option<f64>,

    /// Wind bonus at the peak when --peak is given (km/h)
    #[arg(short, long, default_value_t = 80)]
    wind_bonus: u32,

    /// Simulate a day with no storm
    #[arg(long)]
    calm: bool,

    /// Slider step in hours for the timeline
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of simulated days for the alert outlook (0 = skip)
    #[arg(short, long, default_value_t = 0)]
    ensemble: u32,

    /// Hide calm hours from the timeline
    #[arg(long)]
    storm_only: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SessionError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.calm {
        config.pattern = Some(DailyPattern::calm());
    } else if let Some(peak) = args.peak {
        config.pattern = Some(DailyPattern::new(peak, args.wind_bonus));
    }

    let mut session = Session::from_config(config)?;

    if let Some(query) = &args.location {
        let found = session.registry().find(query).map(str::to_string);
        if let Some(name) = found {
            session.set_location(&name);
        } else {
            warn!("Location '{}' not on the selector list", query);
            session.set_location(query);
        }
    }

    println!("=== Storm Simulation Demo ===\n");
    print_scenario(&session);
    print_timeline(&session, args.step, args.storm_only);
    print_forecast(&session, args.seed);

    if args.ensemble > 0 {
        print_outlook(&session, args.ensemble, args.seed.unwrap_or(0), args.step)?;
    }

    Ok(())
}

fn print_scenario(session: &Session) {
    let profile = session.profile();
    println!("Location: {}", session.location());
    println!(
        "Baseline: {} {}, wind {}",
        profile.base_temperature, profile.base_condition, profile.base_wind
    );

    let pattern = session.pattern();
    match session.storm_window() {
        Some((start, end)) => {
            println!(
                "Storm: peak at {} with +{} km/h wind",
                format_hour(pattern.storm_peak_hour()),
                pattern.max_wind_bonus()
            );
            println!("Storm window: {start:.1}h - {end:.1}h (exclusive)\n");
        }
        None => println!("Storm: none today\n"),
    }
}

fn print_timeline(session: &Session, step: f64, storm_only: bool) {
    println!(
        "{:>9}  {:>10}  {:>9}  {:>15}  {:>5}  Status",
        "Time", "Wind", "Rain", "Lightning", "Meter"
    );
    println!("{}", "-".repeat(72));

    let timeline = session.timeline(step);
    if timeline.is_empty() {
        warn!(
            "Step {} is below the {:.4} h minimum, timeline is empty",
            step, MIN_SLIDER_STEP
        );
    }

    let mut worst = AlertTier::Clear;
    for (hour, state) in timeline {
        worst = worst.max(state.alert_tier);
        if storm_only && state.lightning_rate == 0 && state.alert_tier == AlertTier::Clear {
            continue;
        }
        let readout = Readout::from_state(&state);
        println!(
            "{:>9}  {:>10}  {:>9}  {:>15}  {:>4}%  {}",
            format_hour(hour),
            readout.wind,
            readout.rainfall,
            readout.lightning,
            readout.meter_percent,
            readout.badge
        );
    }

    println!("\nWorst alert today: {}", worst);
    if worst > AlertTier::Clear {
        if let Some(bulletin) = session.bulletin(worst) {
            println!("\n{}\n{}", bulletin.subject, bulletin.body);
        }
    }
    println!();
}

fn print_forecast(session: &Session, seed: Option<u64>) {
    let days = match seed {
        Some(seed) => session.forecast(&mut StdRng::seed_from_u64(seed)),
        None => session.forecast(&mut rand::rng()),
    };

    println!("7-day outlook:");
    for day in days {
        println!("  {}", day.label());
    }
    println!();
}

fn print_outlook(
    session: &Session,
    runs: u32,
    seed: u64,
    step: f64,
) -> Result<(), SessionError> {
    let outlook = session.outlook(runs, seed, step)?;

    println!("Alert outlook over {} simulated days:", outlook.runs());
    println!("{:>9}  {:>7}  {:>7}", "Time", "Yellow", "Orange");
    for (i, hour) in outlook.hours().iter().enumerate() {
        let yellow = outlook.probability(i, AlertTier::Yellow);
        let orange = outlook.probability(i, AlertTier::Orange);
        if yellow + orange > 0.0 {
            println!(
                "{:>9}  {:>6.1}%  {:>6.1}%",
                format_hour(*hour),
                yellow * 100.0,
                orange * 100.0
            );
        }
    }

    match outlook.peak_risk() {
        Some((hour, p)) => println!(
            "Highest orange risk: {} ({:.1}%)",
            format_hour(hour),
            p * 100.0
        ),
        None => println!("No orange alerts in any simulated day"),
    }
    Ok(())
}
