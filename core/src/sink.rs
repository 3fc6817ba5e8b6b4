use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error};
use vigil_common::outcome::CheckResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("result queue closed after {received} of {expected} results")]
    Incomplete { received: usize, expected: usize },
}

/// Receives results until `expected` have arrived, in completion order.
///
/// Returns [`SinkError::Incomplete`] if every sender is gone before that,
/// which only happens when a monitor task died.
pub async fn collect_results<F>(
    mut results: UnboundedReceiver<CheckResult>,
    expected: usize,
    mut on_result: F,
) -> Result<Vec<CheckResult>, SinkError>
where
    F: FnMut(&CheckResult),
{
    let mut received: Vec<CheckResult> = Vec::with_capacity(expected);

    while received.len() < expected {
        match results.recv().await {
            Some(result) => {
                debug!(
                    host = %result.host.name,
                    status = %result.status,
                    passed = result.passed_count,
                    failed = result.failed_count,
                    "Result received"
                );
                on_result(&result);
                received.push(result);
            }
            None => {
                error!(received = received.len(), expected, "Result queue closed early");
                return Err(SinkError::Incomplete {
                    received: received.len(),
                    expected,
                });
            }
        }
    }

    Ok(received)
}
