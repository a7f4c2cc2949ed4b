//! Status poller — fetches `/get_state` and renders the readout.
//!
//! One [`StatusPoller::tick`] is one request. Scheduling lives in
//! [`crate::poller`]; this service only knows how to turn a response into
//! readout text, and how to leave the text alone when something goes wrong.

use std::sync::atomic::{AtomicBool, Ordering};

use ovenpanel_domain::error::PanelError;
use ovenpanel_domain::readout::StatusReadout;

use crate::ports::{PanelApi, ReadoutView};

/// Application service behind the readout.
pub struct StatusPoller<A, V> {
    api: A,
    view: V,
    stale: AtomicBool,
}

impl<A: PanelApi, V: ReadoutView> StatusPoller<A, V> {
    /// Create a new poller writing into `view`.
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            stale: AtomicBool::new(false),
        }
    }

    /// Fetch the status once and render it.
    ///
    /// On failure the view keeps its previous text; it is only told about the
    /// error through [`ReadoutView::show_error`].
    ///
    /// # Errors
    ///
    /// Returns the [`PanelError`] for transport, status or decode failures.
    /// It has already been logged.
    #[tracing::instrument(skip(self))]
    pub async fn tick(&self) -> Result<StatusReadout, PanelError> {
        match self.api.get_state().await {
            Ok(readout) => {
                self.view.render(&readout.to_string());
                if self.stale.swap(false, Ordering::Relaxed) {
                    tracing::info!("status poll recovered");
                    self.view.clear_error();
                }
                Ok(readout)
            }
            Err(err) => {
                tracing::warn!(%err, "status poll failed, keeping previous readout");
                self.stale.store(true, Ordering::Relaxed);
                self.view.show_error(&err);
                Err(err)
            }
        }
    }

    /// Whether the last completed poll failed.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovenpanel_domain::config_form::ConfigFormSubmission;
    use ovenpanel_domain::endpoint::Endpoint;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Serves queued responses to `/get_state`, one per call.
    #[derive(Default)]
    struct ScriptedApi {
        responses: Mutex<VecDeque<Result<StatusReadout, u16>>>,
    }

    impl ScriptedApi {
        fn with(responses: impl IntoIterator<Item = Result<StatusReadout, u16>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }
    }

    impl PanelApi for ScriptedApi {
        async fn set_config(&self, _form: &ConfigFormSubmission) -> Result<(), PanelError> {
            Ok(())
        }

        async fn increment(&self) -> Result<(), PanelError> {
            Ok(())
        }

        async fn get_state(&self) -> Result<StatusReadout, PanelError> {
            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(Ok(readout)) => Ok(readout),
                Some(Err(status)) => Err(PanelError::Status {
                    endpoint: Endpoint::GetState,
                    status,
                }),
                None => Err(PanelError::transport(Endpoint::GetState, "no more responses")),
            }
        }

        async fn set_setpoint(&self, _value: i32) -> Result<(), PanelError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct TextView {
        text: Mutex<String>,
        errors: Mutex<usize>,
        clears: Mutex<usize>,
    }

    impl ReadoutView for TextView {
        fn render(&self, text: &str) {
            *self.text.lock().unwrap() = text.to_string();
        }

        fn show_error(&self, _err: &PanelError) {
            *self.errors.lock().unwrap() += 1;
        }

        fn clear_error(&self) {
            *self.clears.lock().unwrap() += 1;
        }
    }

    fn readout(current: f64, setpoint: f64, elapsed: f64, total: f64) -> StatusReadout {
        StatusReadout::new(current, setpoint, elapsed, total)
    }

    #[tokio::test]
    async fn should_render_readout_template() {
        let poller = StatusPoller::new(
            ScriptedApi::with([Ok(readout(70.0, 72.0, 30.0, 300.0))]),
            TextView::default(),
        );

        poller.tick().await.unwrap();

        assert_eq!(*poller.view.text.lock().unwrap(), "70/72 °F for 30/300 seconds");
        assert!(!poller.is_stale());
    }

    #[tokio::test]
    async fn should_keep_previous_text_when_poll_fails() {
        let poller = StatusPoller::new(
            ScriptedApi::with([Ok(readout(70.0, 72.0, 30.0, 300.0)), Err(500)]),
            TextView::default(),
        );

        poller.tick().await.unwrap();
        let err = poller.tick().await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(*poller.view.text.lock().unwrap(), "70/72 °F for 30/300 seconds");
        assert_eq!(*poller.view.errors.lock().unwrap(), 1);
        assert!(poller.is_stale());
    }

    #[tokio::test]
    async fn should_leave_view_empty_when_first_poll_fails() {
        let poller = StatusPoller::new(ScriptedApi::default(), TextView::default());

        assert!(poller.tick().await.is_err());

        assert_eq!(*poller.view.text.lock().unwrap(), "");
    }

    #[tokio::test]
    async fn should_clear_error_once_after_recovery() {
        let poller = StatusPoller::new(
            ScriptedApi::with([
                Err(500),
                Err(502),
                Ok(readout(71.0, 72.0, 31.0, 300.0)),
                Ok(readout(72.0, 72.0, 32.0, 300.0)),
            ]),
            TextView::default(),
        );

        for _ in 0..4 {
            let _ = poller.tick().await;
        }

        assert_eq!(*poller.view.errors.lock().unwrap(), 2);
        assert_eq!(*poller.view.clears.lock().unwrap(), 1);
        assert_eq!(*poller.view.text.lock().unwrap(), "72/72 °F for 32/300 seconds");
        assert!(!poller.is_stale());
    }
}
