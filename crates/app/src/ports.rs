//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod panel_api;
pub mod readout_view;

pub use panel_api::PanelApi;
pub use readout_view::ReadoutView;
