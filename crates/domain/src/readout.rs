//! Status readout — the JSON snapshot served by `/get_state`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Device status snapshot.
///
/// Values are taken as the device reports them; nothing is range-checked.
/// A field the device leaves out (or sends as `null`) is `None` and renders
/// as `undefined`, same as the page script does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusReadout {
    /// Measured temperature in °F.
    pub current_temp: Option<f64>,
    /// Target temperature in °F.
    pub setpoint_temp: Option<f64>,
    /// Seconds elapsed in the current run.
    pub run_time_elapsed: Option<f64>,
    /// Total seconds configured for the run.
    pub run_time_total: Option<f64>,
}

impl StatusReadout {
    /// Readout with every field present.
    #[must_use]
    pub fn new(current_temp: f64, setpoint_temp: f64, run_time_elapsed: f64, run_time_total: f64) -> Self {
        Self {
            current_temp: Some(current_temp),
            setpoint_temp: Some(setpoint_temp),
            run_time_elapsed: Some(run_time_elapsed),
            run_time_total: Some(run_time_total),
        }
    }

    /// Decode a readout from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] when the body is not a JSON object or
    /// a present field is not a number.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// One readout value as it appears in the template.
struct Value(Option<f64>);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            // `-0.0 + 0.0` is `+0.0`.
            Some(value) => write!(f, "{}", value + 0.0),
            None => f.write_str("undefined"),
        }
    }
}

/// Renders `"{current}/{setpoint} °F for {elapsed}/{total} seconds"`.
///
/// Integral values print without a fractional part (`70`, not `70.0`).
impl fmt::Display for StatusReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} °F for {}/{} seconds",
            Value(self.current_temp),
            Value(self.setpoint_temp),
            Value(self.run_time_elapsed),
            Value(self.run_time_total),
        )
    }
}
