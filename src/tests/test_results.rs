use std::collections::BTreeMap;

use tempfile::tempdir;

use crate::error::ReportError;
use crate::results::{load_results, save_results, AlgorithmResult, Results, DDQN, DQN};

fn sample_results() -> Results {
    let mut cartpole = BTreeMap::new();
    cartpole.insert(DQN.to_string(), AlgorithmResult::new(485.3, 12.5));
    cartpole.insert(
        DDQN.to_string(),
        AlgorithmResult::from_rewards(vec![490.0, 495.0, 500.0]).unwrap(),
    );
    
    let mut results = Results::new();
    results.insert("CartPole-v1".to_string(), cartpole);
    results
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let loaded = load_results(dir.path().join("results.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("results.json");
    let results = sample_results();
    
    save_results(&results, &path).unwrap();
    let loaded = load_results(&path).unwrap().unwrap();
    
    assert_eq!(loaded, results);
    assert_eq!(loaded["CartPole-v1"][DDQN].rewards, vec![490.0, 495.0, 500.0]);
}

#[test]
fn test_load_without_rewards() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");
    std::fs::write(
        &path,
        r#"{"CartPole-v1": {"DQN": {"mean": 100.0, "std": 5.0}, "DDQN": {"mean": 120.0, "std": 4.0}}}"#,
    )
    .unwrap();
    
    let loaded = load_results(&path).unwrap().unwrap();
    let dqn = &loaded["CartPole-v1"][DQN];
    assert_eq!(dqn.mean, 100.0);
    assert_eq!(dqn.std, 5.0);
    assert!(dqn.rewards.is_empty());
}

#[test]
fn test_load_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");
    std::fs::write(&path, "{ not json").unwrap();
    
    let result = load_results(&path);
    assert!(matches!(result, Err(ReportError::Json(_))));
}

#[test]
fn test_from_rewards_summarises() {
    let result = AlgorithmResult::from_rewards(vec![490.0, 495.0, 500.0]).unwrap();
    assert!((result.mean - 495.0).abs() < 1e-9);
    assert!((result.std - (50.0f64 / 3.0).sqrt()).abs() < 1e-9);
    
    assert!(AlgorithmResult::from_rewards(Vec::new()).is_err());
}
