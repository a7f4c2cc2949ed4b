//! Application services — one per panel control.

pub mod config_submitter;
pub mod increment_trigger;
pub mod status_poller;
