//! Config submitter — posts the config form to the device.

use ovenpanel_domain::config_form::ConfigFormSubmission;
use ovenpanel_domain::error::PanelError;

use crate::ports::PanelApi;

/// Application service for the config form.
pub struct ConfigSubmitter<A> {
    api: A,
}

impl<A: PanelApi> ConfigSubmitter<A> {
    /// Create a new submitter backed by the given device API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Submit the form fields, in order, as a urlencoded body.
    ///
    /// No field validation happens here; the device decides what it accepts.
    ///
    /// # Errors
    ///
    /// Returns the [`PanelError`] from the device API. It is also logged, so
    /// callers that do not surface failures can drop it.
    #[tracing::instrument(skip(self, form), fields(field_count = form.len()))]
    pub async fn submit(&self, form: &ConfigFormSubmission) -> Result<(), PanelError> {
        match self.api.set_config(form).await {
            Ok(()) => {
                tracing::debug!("config accepted by device");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "config submission failed");
                Err(err)
            }
        }
    }

    /// Set the setpoint directly through `/set/{value}`.
    ///
    /// # Errors
    ///
    /// Returns (and logs) the [`PanelError`] from the device API.
    #[tracing::instrument(skip(self))]
    pub async fn submit_setpoint(&self, value: i32) -> Result<(), PanelError> {
        self.api.set_setpoint(value).await.inspect_err(|err| {
            tracing::warn!(%err, "setpoint update failed");
        })
    }
}
