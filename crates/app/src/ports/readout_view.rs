//! Readout view port — where the status text ends up.

use std::sync::Arc;

use ovenpanel_domain::error::PanelError;

/// Display surface for the readout, written only by the status poller.
pub trait ReadoutView: Send + Sync {
    /// Replace the displayed readout text.
    fn render(&self, text: &str);

    /// A poll failed; the current text stays as it is.
    ///
    /// Views may mark the readout as stale. The default does nothing.
    fn show_error(&self, _err: &PanelError) {}

    /// A poll succeeded after one or more failures.
    fn clear_error(&self) {}
}

impl<T: ReadoutView> ReadoutView for Arc<T> {
    fn render(&self, text: &str) {
        (**self).render(text);
    }

    fn show_error(&self, err: &PanelError) {
        (**self).show_error(err);
    }

    fn clear_error(&self) {
        (**self).clear_error();
    }
}
