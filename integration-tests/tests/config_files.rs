use gapwatch_core::Progress;
use gapwatch_observers::{StallMonitor, stall};
use gapwatch_search::{Config, Finish, Replay, Status, run};
use serde::Deserialize;

/// Settings file for an optimizer run with gap-stall termination.
#[derive(Debug, Deserialize)]
struct RunSettings {
    time_limit: Option<f64>,
    stall: stall::Config,
}

#[test]
fn loads_stall_config_from_toml() {
    let settings: RunSettings = toml::from_str(
        r#"
        time_limit = 600.0

        [stall]
        stall_timeout = 30.0
        gap_epsilon = 1e-3
        "#,
    )
    .expect("valid settings");

    assert_eq!(settings.time_limit, Some(600.0));
    assert_eq!(settings.stall, stall::Config::new(30.0, 1e-3).unwrap());
}

#[test]
fn missing_fields_use_defaults() {
    let config: stall::Config =
        toml::from_str("stall_timeout = 120.0").expect("valid partial config");

    assert_eq!(config.stall_timeout(), 120.0);
    assert_eq!(config.gap_epsilon(), stall::Config::default().gap_epsilon());

    let config: stall::Config = serde_json::from_str("{}").expect("empty object is valid");
    assert_eq!(config, stall::Config::default());
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let error = toml::from_str::<stall::Config>("stall_timeout = 0.0").unwrap_err();
    assert!(
        error
            .to_string()
            .contains("stall_timeout must be finite and strictly positive"),
        "{error}"
    );

    let error =
        serde_json::from_str::<stall::Config>(r#"{"stall_timeout": 50.0, "gap_epsilon": -1.0}"#)
            .unwrap_err();
    assert!(
        error
            .to_string()
            .contains("gap_epsilon must be finite and strictly positive"),
        "{error}"
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let result = toml::from_str::<stall::Config>("stall_timout = 10.0");
    assert!(result.is_err());
}

#[test]
fn replays_a_recorded_json_trace() {
    let trace: Vec<Progress> = serde_json::from_str(
        r#"[
            {"incumbent_count": 0, "incumbent_objective": 0.0, "best_bound": 812.0, "elapsed_time": 0.0},
            {"incumbent_count": 1, "incumbent_objective": 640.0, "best_bound": 812.0, "elapsed_time": 4.0},
            {"incumbent_count": 2, "incumbent_objective": 701.0, "best_bound": 790.0, "elapsed_time": 9.0},
            {"incumbent_count": 2, "incumbent_objective": 701.0, "best_bound": 789.99, "elapsed_time": 15.0},
            {"incumbent_count": 2, "incumbent_objective": 701.0, "best_bound": 789.99, "elapsed_time": 21.0},
            {"incumbent_count": 3, "incumbent_objective": 760.0, "best_bound": 775.0, "elapsed_time": 30.0}
        ]"#,
    )
    .expect("valid trace");

    let settings: RunSettings = toml::from_str(
        r#"
        [stall]
        stall_timeout = 10.0
        "#,
    )
    .expect("valid settings");

    let config = Config::new(settings.time_limit).expect("valid run config");
    let mut monitor = StallMonitor::new(settings.stall);

    let outcome = run(Replay::new(trace, Finish::Optimal), &config, &mut monitor)
        .expect("replay cannot fail");

    // The gap last moved significantly at t=9 (the t=15 change is ~1e-5), so
    // the checkpoint at t=21 is the first more than 10 s later.
    assert_eq!(outcome.status, Status::InterruptedByCallback);
    assert_eq!(outcome.checkpoints, 5);
    assert_eq!(monitor.stall().map(|s| s.last_change_time), Some(9.0));
}

#[test]
fn progress_round_trips_through_json() {
    let progress = Progress::new(3, 12.5, 10.0, 7.25);

    let json = serde_json::to_string(&progress).expect("serializable");
    let back: Progress = serde_json::from_str(&json).expect("deserializable");

    assert_eq!(back, progress);
}
