//! # ovenpanel-adapter-http-reqwest
//!
//! Native HTTP adapter — talks to the oven's embedded web server with
//! `reqwest` and exposes it through the [`PanelApi`](ovenpanel_app::ports::PanelApi) port.
//!
//! ## Endpoints
//!
//! | Port method | Request | Success |
//! |-------------|---------|---------|
//! | `set_config` | `POST /set_config`, urlencoded body | 2xx |
//! | `increment` | `GET /increment` | 2xx (redirects followed) |
//! | `get_state` | `GET /get_state` | 2xx with a JSON readout |
//! | `set_setpoint` | `GET /set/{value}` | 2xx (redirects followed) |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `ovenpanel-app` and `ovenpanel-domain`.

mod client;
mod config;
mod error;

pub use client::ReqwestPanelApi;
pub use config::DeviceConfig;
pub use error::HttpAdapterError;
