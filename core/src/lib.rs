//! # Vigil Core
//!
//! Concurrent TCP liveness checking for a list of hosts.
//!
//! * **[`connector`]**: the probe capability and its tokio TCP implementation.
//! * **[`monitor`]**: the per-host check loop that turns probes into a verdict.
//! * **[`orchestrator`]**: builds hosts from input lines and spawns one monitor per host.
//! * **[`sink`]**: drains the shared result queue until every host has reported.

pub mod connector;
pub mod monitor;
pub mod orchestrator;
pub mod sink;
