//! # ovenpanel-domain
//!
//! Pure domain model for the oven control panel client.
//!
//! ## Responsibilities
//! - Define the **config form submission** and its urlencoded wire form
//! - Define the **status readout** received from the device and its text rendering
//! - Enumerate the device **endpoints** this client consumes
//! - Define the shared **error taxonomy** (transport, status, decode)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Both the native client (through `ovenpanel-app`) and the browser binding
//! depend on it directly.

pub mod config_form;
pub mod endpoint;
pub mod error;
pub mod readout;
