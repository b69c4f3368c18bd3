use std::collections::BTreeMap;

use tempfile::tempdir;

use crate::builders::ReportConfigBuilder;
use crate::error::ReportError;
use crate::results::{AlgorithmResult, Results, DDQN, DQN};
use crate::visualization::create_summary_table;

fn reporter_in(dir: &std::path::Path) -> crate::Reporter {
    ReportConfigBuilder::new()
        .save_dir(dir)
        .dpi(40)
        .build_reporter()
        .unwrap()
}

#[test]
fn test_summary_table_zero_dqn_mean() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary_table.txt");
    
    let mut algos = BTreeMap::new();
    algos.insert(DQN.to_string(), AlgorithmResult::new(0.0, 1.0));
    algos.insert(DDQN.to_string(), AlgorithmResult::new(10.0, 1.0));
    let mut results = Results::new();
    results.insert("Zero-v0".to_string(), algos);
    
    let result = create_summary_table(&results, &path);
    assert!(matches!(result, Err(ReportError::DivisionByZero(_))));
    assert!(!path.exists());
}

#[test]
fn test_missing_algorithm() {
    let dir = tempdir().unwrap();
    
    let mut algos = BTreeMap::new();
    algos.insert(DQN.to_string(), AlgorithmResult::new(100.0, 5.0));
    let mut results = Results::new();
    results.insert("CartPole-v1".to_string(), algos);
    
    let result = reporter_in(dir.path()).plot_all_environments_comparison(&results);
    match result {
        Err(ReportError::MissingAlgorithm { environment, algorithm }) => {
            assert_eq!(environment, "CartPole-v1");
            assert_eq!(algorithm, DDQN);
        }
        other => panic!("expected MissingAlgorithm, got {:?}", other),
    }
    
    let table = create_summary_table(&results, dir.path().join("table.txt"));
    assert!(matches!(table, Err(ReportError::MissingAlgorithm { .. })));
}

#[test]
fn test_empty_inputs_rejected() {
    let dir = tempdir().unwrap();
    let reporter = reporter_in(dir.path());
    
    let result = reporter.plot_training_comparison(&[], &[1.0], "Env");
    assert!(matches!(result, Err(ReportError::EmptySeries(_))));
    
    let result = reporter.plot_evaluation_stability(&[], "Env", "DQN");
    assert!(matches!(result, Err(ReportError::EmptySeries(_))));
    
    let result = reporter.plot_loss_curves(&[], "Env", "DQN");
    assert!(matches!(result, Err(ReportError::EmptySeries(_))));
    
    let empty: Vec<(f64, Vec<f64>)> = Vec::new();
    let result = reporter.plot_hyperparameter_comparison(empty, "GAMMA", "Env");
    assert!(matches!(result, Err(ReportError::EmptySeries(_))));
    
    let result = reporter.plot_hyperparameter_comparison(vec![(0.99, Vec::<f64>::new())], "GAMMA", "Env");
    assert!(matches!(result, Err(ReportError::EmptySeries(_))));
    
    let result = reporter.plot_all_environments_comparison(&Results::new());
    assert!(matches!(result, Err(ReportError::EmptySeries(_))));
    
    // Nothing was rendered
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_loss_curves_without_positive_values_rejected() {
    let dir = tempdir().unwrap();
    let result = reporter_in(dir.path()).plot_loss_curves(&[0.0, -0.5, 0.0], "Env", "DQN");
    assert!(matches!(result, Err(ReportError::InvalidParameter { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_loss_curves_skip_warmup_zeros() {
    let dir = tempdir().unwrap();
    let mut losses = vec![0.0; 10];
    losses.extend((1..=200).map(|i| 1.0 / i as f64));

    let path = reporter_in(dir.path()).plot_loss_curves(&losses, "Env", "DQN").unwrap();
    assert_eq!(path, dir.path().join("Env_DQN_loss.png"));
    assert!(path.exists());
}

#[test]
fn test_non_finite_rewards_rejected() {
    let dir = tempdir().unwrap();
    let reporter = reporter_in(dir.path());

    let result = reporter.plot_evaluation_stability(&[1.0, f64::INFINITY], "Env", "DQN");
    assert!(matches!(result, Err(ReportError::InvalidParameter { .. })));

    let result = reporter.plot_training_comparison(&[1.0, f64::NAN], &[1.0, 2.0], "Env");
    assert!(matches!(result, Err(ReportError::InvalidParameter { .. })));

    let result = reporter.plot_hyperparameter_comparison(
        vec![(0.99, vec![1.0, f64::NEG_INFINITY])],
        "GAMMA",
        "Env",
    );
    assert!(matches!(result, Err(ReportError::InvalidParameter { .. })));

    let mut algos = BTreeMap::new();
    algos.insert(DQN.to_string(), AlgorithmResult::new(f64::INFINITY, 1.0));
    algos.insert(DDQN.to_string(), AlgorithmResult::new(10.0, 1.0));
    let mut results = Results::new();
    results.insert("Inf-v0".to_string(), algos);
    let result = reporter.plot_all_environments_comparison(&results);
    assert!(matches!(result, Err(ReportError::InvalidParameter { .. })));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
