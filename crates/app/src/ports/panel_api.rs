//! Device API port — the HTTP endpoints exposed by the oven firmware.

use std::future::Future;
use std::sync::Arc;

use ovenpanel_domain::config_form::ConfigFormSubmission;
use ovenpanel_domain::error::PanelError;
use ovenpanel_domain::readout::StatusReadout;

/// Requests the panel can make against the device.
///
/// Every call is independent: implementations must not serialize, dedupe or
/// retry requests.
pub trait PanelApi: Send + Sync {
    /// `POST /set_config` with the urlencoded form body.
    fn set_config(
        &self,
        form: &ConfigFormSubmission,
    ) -> impl Future<Output = Result<(), PanelError>> + Send;

    /// `GET /increment`.
    fn increment(&self) -> impl Future<Output = Result<(), PanelError>> + Send;

    /// `GET /get_state`, decoded into a [`StatusReadout`].
    fn get_state(&self) -> impl Future<Output = Result<StatusReadout, PanelError>> + Send;

    /// `GET /set/{value}`.
    fn set_setpoint(&self, value: i32) -> impl Future<Output = Result<(), PanelError>> + Send;
}

impl<T: PanelApi> PanelApi for Arc<T> {
    fn set_config(
        &self,
        form: &ConfigFormSubmission,
    ) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).set_config(form)
    }

    fn increment(&self) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).increment()
    }

    fn get_state(&self) -> impl Future<Output = Result<StatusReadout, PanelError>> + Send {
        (**self).get_state()
    }

    fn set_setpoint(&self, value: i32) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).set_setpoint(value)
    }
}
