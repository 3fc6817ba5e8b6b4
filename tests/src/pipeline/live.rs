use std::sync::Arc;
use std::time::{Duration, Instant};

use vigil_common::outcome::Status;
use vigil_core::connector::TcpConnector;
use vigil_core::orchestrator::Orchestrator;

use crate::support::{closed_port, config, spawn_listener};

/// This test verifies that a host with an open port is reported up.
#[tokio::test]
async fn listening_port_is_up() {
    let port = spawn_listener().await;
    let cfg = config(port, 3, Duration::from_millis(300), Duration::from_millis(50));
    let orchestrator = Orchestrator::new(cfg, Arc::new(TcpConnector)).unwrap();

    let results = orchestrator.monitor(orchestrator.hosts(["127.0.0.1"]), |_| {}).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].failed_count, 0);
    assert!(results[0].passed_count > 0, "no probe ran: {:?}", results[0]);
    assert_eq!(results[0].status, Status::Up);
    assert_eq!(results[0].message, "127.0.0.1 is reporting ok");
}

#[tokio::test]
async fn closed_port_is_down_before_the_window_ends() {
    let port = closed_port().await;
    let cfg = config(port, 2, Duration::from_secs(30), Duration::from_millis(20));
    let orchestrator = Orchestrator::new(cfg, Arc::new(TcpConnector)).unwrap();
    let start = Instant::now();

    let results = orchestrator.monitor(orchestrator.hosts(["127.0.0.1"]), |_| {}).await.unwrap();

    assert!(start.elapsed() < Duration::from_secs(10));
    assert_eq!(results[0].failed_count, 2);
    assert_eq!(results[0].status, Status::Down);
    assert_eq!(results[0].message, "127.0.0.1 is down");
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn mixed_hosts_report_independently() {
    // Only 127.0.0.1 is bound, the rest of the loopback range refuses.
    let port = spawn_listener().await;
    let cfg = config(port, 2, Duration::from_millis(400), Duration::from_millis(50));
    let orchestrator = Orchestrator::new(cfg, Arc::new(TcpConnector)).unwrap();

    let results = orchestrator
        .monitor(orchestrator.hosts(["127.0.0.1", "", "127.0.0.2"]), |_| {})
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    for result in results {
        let expected = if result.host.name == "127.0.0.1" { Status::Up } else { Status::Down };
        assert_eq!(result.status, expected, "{}", result.message);
    }
}
