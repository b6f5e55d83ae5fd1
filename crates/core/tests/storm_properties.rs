//! Behavioural properties of the storm intensity model
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use storm_sim_core::{
    evaluate, AlertTier, Condition, DailyPattern, LocationProfile, LocationRegistry, StormModel,
};

fn cloudy_town() -> LocationProfile {
    LocationProfile::new(31, Condition::Cloudy, 12)
}

/// Every hour from 0 to 24 in 0.05 h steps
fn fine_hours() -> impl Iterator<Item = f64> {
    (0..=480).map(|i| f64::from(i) * 0.05)
}

#[test]
fn test_outside_window_is_clear() {
    let town = cloudy_town();
    for peak in 14..=17 {
        let pattern = DailyPattern::new(f64::from(peak), 99);
        for hour in fine_hours() {
            let distance = (hour - pattern.storm_peak_hour()).abs();
            if distance >= 1.5 {
                let state = evaluate(hour, &pattern, &town);
                assert_eq!(state.alert_tier, AlertTier::Clear, "hour {hour} peak {peak}");
                assert_eq!(state.lightning_rate, 0, "hour {hour} peak {peak}");
                assert_eq!(*state.rainfall, 0.0);
            }
        }
    }
}

#[test]
fn test_peak_is_full_intensity() {
    let model = StormModel::STANDARD;
    let pattern = DailyPattern::new(15.0, 80);

    assert_eq!(model.intensity_at(15.0, &pattern), Some(1.0));

    let state = evaluate(15.0, &pattern, &cloudy_town());
    assert_eq!(*state.wind_speed, 92.0);
    assert_eq!(*state.rainfall, 60.0);
    assert_eq!(state.lightning_rate, 50);
    assert_eq!(state.alert_tier, AlertTier::Orange);
}

#[test]
fn test_boundary_has_no_storm_bonus() {
    let model = StormModel::STANDARD;
    let pattern = DailyPattern::new(15.0, 80);
    assert_eq!(model.intensity(1.5), 0.0);

    for hour in [13.5, 16.5] {
        let state = evaluate(hour, &pattern, &cloudy_town());
        assert_eq!(state.alert_tier, AlertTier::Clear);
        // Only the calm wobble, never the 80 km/h bonus
        assert_relative_eq!(*state.wind_speed, 12.0 + hour.sin() * 5.0);
    }
}

#[test]
fn test_intensity_is_monotonic_in_distance() {
    let model = StormModel::STANDARD;
    let distances: Vec<f64> = (0..150).map(|i| f64::from(i) * 0.01).collect();

    for pair in distances.windows(2) {
        let (near, far) = (model.intensity(pair[0]), model.intensity(pair[1]));
        assert!(
            near >= far,
            "intensity rose from {near} at {} to {far} at {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_dashboard_examples() {
    let pattern = DailyPattern::new(15.0, 80);
    let town = cloudy_town();

    let noon = evaluate(12.0, &pattern, &town);
    assert_relative_eq!(*noon.wind_speed, 9.32, epsilon = 0.01);
    assert_eq!(*noon.rainfall, 0.0);
    assert_eq!(noon.lightning_rate, 0);
    assert_eq!(noon.alert_tier, AlertTier::Clear);

    let tail = evaluate(16.25, &pattern, &town);
    assert_eq!(tail.alert_tier, AlertTier::Clear);
    assert_eq!(tail.lightning_rate, 8);
}

#[test]
fn test_tier_never_exceeds_intensity_band() {
    let model = StormModel::STANDARD;
    let town = cloudy_town();
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..50 {
        let pattern = model.generate(&mut rng);
        for hour in fine_hours() {
            let state = model.evaluate(hour, &pattern, &town);
            let intensity = model.intensity_at(hour, &pattern).unwrap_or(0.0);
            let expected = if intensity > 0.8 {
                AlertTier::Orange
            } else if intensity > 0.4 {
                AlertTier::Yellow
            } else {
                AlertTier::Clear
            };
            assert_eq!(state.alert_tier, expected);
            assert!(state.lightning_rate <= 50);
            assert!(*state.wind_speed <= 12.0 + f64::from(pattern.max_wind_bonus()) + 5.0);
        }
    }
}

#[test]
fn test_every_location_resolves() {
    let registry = LocationRegistry::builtin();
    let pattern = DailyPattern::new(16.0, 70);

    for location in registry.selector_order() {
        let profile = registry.profile(location);
        let state = evaluate(16.0, &pattern, profile);
        assert_eq!(state.alert_tier, AlertTier::Orange, "{location}");
        assert_eq!(*state.wind_speed, *profile.base_wind + 70.0, "{location}");
    }
}
