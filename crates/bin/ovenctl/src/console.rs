//! Terminal readout view.

use std::io::Write;
use std::sync::Mutex;

use ovenpanel_app::ports::ReadoutView;

/// Prints each rendered readout as one line.
pub struct TerminalReadout<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalReadout<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> ReadoutView for TerminalReadout<W> {
    fn render(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(%err, "failed to write readout");
        }
    }
}
