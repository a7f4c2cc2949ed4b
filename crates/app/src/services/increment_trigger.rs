//! Increment trigger — one `/increment` request per trigger.

use ovenpanel_domain::error::PanelError;

use crate::ports::PanelApi;

/// Application service behind the increment control.
///
/// There is no debouncing: every call issues its own request and the device
/// is responsible for ordering them.
pub struct IncrementTrigger<A> {
    api: A,
}

impl<A: PanelApi> IncrementTrigger<A> {
    /// Create a new trigger backed by the given device API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Issue one increment request.
    ///
    /// # Errors
    ///
    /// Returns (and logs) the [`PanelError`] when the request fails or the
    /// device answers with a non-success status.
    #[tracing::instrument(skip(self))]
    pub async fn trigger(&self) -> Result<(), PanelError> {
        self.api.increment().await.inspect_err(|err| {
            tracing::warn!(%err, "increment failed");
        })
    }
}
