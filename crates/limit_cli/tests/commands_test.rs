//! Command behaviour that does not depend on rendering.

use limit_cli::commands;
use limit_cli::{CliError, LabConfig};
use limit_sim::SimulationError;

fn config_in(dir: &std::path::Path) -> LabConfig {
    LabConfig {
        results_dir: dir.join("results"),
        reports_dir: dir.join("reports"),
        ..LabConfig::default()
    }
}

#[test]
fn setup_creates_skeleton_idempotently() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let created = commands::setup::run(&config).unwrap();
    assert_eq!(created.len(), 5);
    for sub in ["results", "results/slln", "results/clt", "results/figures", "reports"] {
        assert!(tmp.path().join(sub).is_dir(), "{sub} missing");
    }

    assert_eq!(commands::setup::run(&config).unwrap(), created);
}

#[test]
fn moments_runs_with_preview() {
    let tmp = tempfile::tempdir().unwrap();
    commands::moments::run(&config_in(tmp.path()), true).unwrap();
}

#[test]
fn unknown_distribution_exits_with_lookup_status() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let err = commands::slln::run(&config, Some("Weibull")).unwrap_err();
    assert!(matches!(err, CliError::Lookup(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("Cauchy"));

    let err = commands::clt::run(&config, Some("gamma")).unwrap_err();
    assert_eq!(err.exit_code(), 2);

    assert!(!tmp.path().join("results/slln").exists());
}

#[test]
fn clt_refuses_infinite_variance() {
    let tmp = tempfile::tempdir().unwrap();
    let err = commands::clt::run(&config_in(tmp.path()), Some("pareto1.5")).unwrap_err();

    assert!(matches!(
        err,
        CliError::Simulation(SimulationError::TheoremNotApplicable { .. })
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn invalid_simulation_settings_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = config_in(tmp.path());
    config.pi.points = 0;

    let err = commands::pi::run(&config).unwrap_err();
    assert!(matches!(err, CliError::SimulationConfig(_)));
}
