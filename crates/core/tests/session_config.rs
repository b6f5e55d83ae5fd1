//! Sessions driven from config files
use std::path::PathBuf;
use storm_sim_core::{
    AlertTier, ConfigError, DailyPattern, Session, SessionError, SimulationConfig, StormModel,
};

#[ctor::ctor]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn temp_config(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("storm_sim_{name}_{}.json", std::process::id()))
}

#[test]
fn test_config_file_drives_session() {
    let path = temp_config("fixed_day");
    let config = SimulationConfig {
        default_location: "Tagaytay City, Cavite".to_string(),
        initial_hour: 16.0,
        pattern: Some(DailyPattern::new(16.0, 75)),
        ..SimulationConfig::default()
    };
    config.save(&path).unwrap();

    let loaded = SimulationConfig::load(&path).unwrap();
    let session = Session::from_config(loaded).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(session.location(), "Tagaytay City, Cavite");
    let state = session.current();
    assert_eq!(*state.wind_speed, 100.0);
    assert_eq!(state.alert_tier, AlertTier::Orange);
    assert_eq!(session.storm_window(), Some((14.5, 17.5)));
}

#[test]
fn test_custom_model_constants() {
    let config = SimulationConfig::from_json(
        r#"{
            "model": { "storm_window_hours": 3.0, "peak_lightning": 40.0 },
            "pattern": { "storm_peak_hour": 15.0, "max_wind_bonus": 60, "has_storm": true }
        }"#,
    )
    .unwrap();
    let mut session = Session::from_config(config).unwrap();

    // Distance 1.5 is now inside the wider window at half intensity
    let state = session.set_hour(16.5).unwrap();
    assert_eq!(state.alert_tier, AlertTier::Yellow);
    assert_eq!(state.lightning_rate, 20);
    assert_eq!(*state.wind_speed, 12.0 + 30.0);
}

#[test]
fn test_calm_day_from_config() {
    let config = SimulationConfig::from_json(
        r#"{"pattern": {"storm_peak_hour": 0.0, "max_wind_bonus": 0, "has_storm": false}}"#,
    )
    .unwrap();
    let session = Session::from_config(config).unwrap();

    assert_eq!(session.storm_window(), None);
    assert!(session
        .timeline(0.5)
        .iter()
        .all(|(_, s)| s.alert_tier == AlertTier::Clear));
}

#[test]
fn test_inverted_ranges_rejected() {
    let config = SimulationConfig {
        model: StormModel {
            wind_bonus_min: 120,
            ..StormModel::STANDARD
        },
        ..SimulationConfig::default()
    };
    let err = Session::from_config(config).unwrap_err();
    assert!(matches!(err, SessionError::Config(ConfigError::Invalid(_))));
    assert!(err.to_string().starts_with("Invalid config:"));
}

#[test]
fn test_seeded_outlook_matches_session() {
    let config = SimulationConfig {
        seed: Some(2026),
        ..SimulationConfig::default()
    };
    let session = Session::from_config(config).unwrap();

    let outlook = session.outlook(300, 2026, 0.5).unwrap();
    assert_eq!(outlook, session.outlook(300, 2026, 0.5).unwrap());
    assert_eq!(outlook.probability(0, AlertTier::Clear), 1.0);
}
