use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use vigil_common::outcome::{CheckResult, Status};
use vigil_core::orchestrator::Orchestrator;
use vigil_core::sink;

use crate::support::{PatternConnector, config};

const HOST_LIST: &str = "127.0.0.1\n192.168.1.6\n192.168.1.32\nfoo.bar.net";

/// One always-reachable host over a 30s window with 6s ticks reports four passes.
#[tokio::test(start_paused = true)]
async fn single_healthy_host_end_to_end() {
    let connector = Arc::new(PatternConnector::new(&[true]));
    let cfg = config(22, 4, Duration::from_secs(30), Duration::from_secs(6));
    let orchestrator = Orchestrator::new(cfg, connector.clone()).unwrap();

    let (tx, rx) = mpsc::unbounded_channel();
    let expected = orchestrator.launch(orchestrator.hosts("127.0.0.1".lines()), tx);
    let results = sink::collect_results(rx, expected, |_| {}).await.unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.host.name, "127.0.0.1");
    assert_eq!(result.passed_count, 4);
    assert_eq!(result.failed_count, 0);
    assert_eq!(result.status, Status::Up);
    assert_eq!(connector.addresses(), vec!["127.0.0.1:22"; 4]);
}

#[tokio::test(start_paused = true)]
async fn every_host_reports_exactly_once() {
    let connector = Arc::new(PatternConnector::new(&[true, false]));
    let cfg = config(22, 5, Duration::from_secs(60), Duration::from_secs(20));
    let orchestrator = Orchestrator::new(cfg, connector.clone()).unwrap();

    let mut order: Vec<String> = Vec::new();
    let results: Vec<CheckResult> = orchestrator
        .monitor(orchestrator.hosts(HOST_LIST.lines()), |r| order.push(r.host.name.clone()))
        .await
        .unwrap();

    assert_eq!(results.len(), 4);
    order.sort();
    assert_eq!(order, ["127.0.0.1", "192.168.1.32", "192.168.1.6", "foo.bar.net"]);
    // Two ticks fit in the window for each host.
    assert_eq!(connector.calls(), 8);
    for result in &results {
        assert_eq!(result.probes(), 2);
        assert!(matches!(result.status, Status::Up | Status::Down | Status::Flapping));
    }
}

#[tokio::test(start_paused = true)]
async fn alternating_probes_are_flapping() {
    let connector = Arc::new(PatternConnector::new(&[false, true]));
    let cfg = config(80, 5, Duration::from_secs(60), Duration::from_secs(10));
    let orchestrator = Orchestrator::new(cfg, connector).unwrap();

    let results = orchestrator.monitor(orchestrator.hosts(["db01"]), |_| {}).await.unwrap();

    assert_eq!(results[0].failed_count, 3);
    assert_eq!(results[0].passed_count, 2);
    assert_eq!(results[0].status, Status::Flapping);
    assert_eq!(results[0].message, "db01 is flapping");
}

#[tokio::test(start_paused = true)]
async fn threshold_stops_probing_before_the_window_ends() {
    let connector = Arc::new(PatternConnector::new(&[false]));
    let cfg = config(22, 3, Duration::from_secs(300), Duration::from_secs(30));
    let orchestrator = Orchestrator::new(cfg, connector.clone()).unwrap();
    let start = tokio::time::Instant::now();

    let results = orchestrator.monitor(orchestrator.hosts(["10.0.0.9"]), |_| {}).await.unwrap();

    assert_eq!(results[0].status, Status::Down);
    assert_eq!(results[0].failed_count, 3);
    assert_eq!(connector.calls(), 3);
    assert_eq!(start.elapsed(), Duration::from_secs(90));
}

#[test]
fn interval_longer_than_limit_never_starts() {
    let connector = Arc::new(PatternConnector::new(&[true]));
    let cfg = config(22, 5, Duration::from_secs(10), Duration::from_secs(11));

    assert!(Orchestrator::new(cfg, connector.clone()).is_err());
    assert_eq!(connector.calls(), 0);
}
