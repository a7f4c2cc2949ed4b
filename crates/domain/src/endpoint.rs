//! Device endpoints consumed by the panel.
//!
//! The device firmware owns these routes; the client only needs to know the
//! method and path of each one.

use std::borrow::Cow;
use std::fmt;

/// Content type used for `/set_config` submissions.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP method used by an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A device route the panel talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /set_config` with a urlencoded form body.
    SetConfig,
    /// `GET /increment`, bumps the setpoint by one degree.
    Increment,
    /// `GET /get_state`, returns a JSON status readout.
    GetState,
    /// `GET /set/{value}`, sets the setpoint directly.
    SetSetpoint(i32),
}

impl Endpoint {
    /// HTTP method for this endpoint.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::SetConfig => Method::Post,
            Self::Increment | Self::GetState | Self::SetSetpoint(_) => Method::Get,
        }
    }

    /// Absolute path of this endpoint on the device.
    #[must_use]
    pub fn path(self) -> Cow<'static, str> {
        match self {
            Self::SetConfig => Cow::Borrowed("/set_config"),
            Self::Increment => Cow::Borrowed("/increment"),
            Self::GetState => Cow::Borrowed("/get_state"),
            Self::SetSetpoint(value) => Cow::Owned(format!("/set/{value}")),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
