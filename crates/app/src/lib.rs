//! # ovenpanel-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PanelApi`: the device's HTTP endpoints
//!   - `ReadoutView`: wherever the readout text is displayed
//! - Define the use-case services:
//!   - `ConfigSubmitter`: post the config form, set the setpoint directly
//!   - `IncrementTrigger`: one increment request per trigger
//!   - `StatusPoller`: fetch the status and render it, keeping stale text on failure
//! - Drive the poller on a fixed period with a stoppable handle (`poller`)
//!
//! ## Dependency rule
//! Depends on `ovenpanel-domain` only (plus `tokio` for the timer and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
pub mod services;
