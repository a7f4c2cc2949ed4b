//! HTTP client wrapping `gloo-net` for calls to the device endpoints.
//!
//! Paths are relative: the page is served by the device itself.

use gloo_net::http::{Request, RequestBuilder, Response};
use ovenpanel_domain::config_form::ConfigFormSubmission;
use ovenpanel_domain::endpoint::{Endpoint, FORM_CONTENT_TYPE, Method};
use ovenpanel_domain::error::{PanelError, check_status};
use ovenpanel_domain::readout::StatusReadout;

fn request(endpoint: Endpoint) -> RequestBuilder {
    let path = endpoint.path();
    match endpoint.method() {
        Method::Get => Request::get(&path),
        Method::Post => Request::post(&path),
    }
}

/// Check the HTTP response status and map non-2xx to [`PanelError::Status`].
fn check_response(endpoint: Endpoint, resp: Response) -> Result<Response, PanelError> {
    check_status(endpoint, resp.status())?;
    Ok(resp)
}

fn transport(endpoint: Endpoint) -> impl FnOnce(gloo_net::Error) -> PanelError {
    move |err| PanelError::transport(endpoint, err.to_string())
}

/// Post the config form as `application/x-www-form-urlencoded`.
pub async fn set_config(form: &ConfigFormSubmission) -> Result<(), PanelError> {
    let endpoint = Endpoint::SetConfig;
    let resp = request(endpoint)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(form.encode())
        .map_err(transport(endpoint))?
        .send()
        .await
        .map_err(transport(endpoint))?;
    check_response(endpoint, resp)?;
    Ok(())
}

/// Ask the device to bump the setpoint by one.
pub async fn increment() -> Result<(), PanelError> {
    let endpoint = Endpoint::Increment;
    let resp = request(endpoint).send().await.map_err(transport(endpoint))?;
    check_response(endpoint, resp)?;
    Ok(())
}

/// Set the setpoint directly.
pub async fn set_setpoint(value: i32) -> Result<(), PanelError> {
    let endpoint = Endpoint::SetSetpoint(value);
    let resp = request(endpoint).send().await.map_err(transport(endpoint))?;
    check_response(endpoint, resp)?;
    Ok(())
}

/// Fetch the current status readout.
pub async fn get_state() -> Result<StatusReadout, PanelError> {
    let endpoint = Endpoint::GetState;
    let resp = request(endpoint).send().await.map_err(transport(endpoint))?;
    let resp = check_response(endpoint, resp)?;
    let body = resp
        .text()
        .await
        .map_err(|err| PanelError::decode(endpoint, err.to_string()))?;
    StatusReadout::from_json(body.as_bytes()).map_err(|err| PanelError::decode(endpoint, err))
}
