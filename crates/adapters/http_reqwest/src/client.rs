//! `reqwest`-backed implementation of the [`PanelApi`] port.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};

use ovenpanel_app::ports::PanelApi;
use ovenpanel_domain::config_form::ConfigFormSubmission;
use ovenpanel_domain::endpoint::{Endpoint, FORM_CONTENT_TYPE, Method};
use ovenpanel_domain::error::{PanelError, check_status};
use ovenpanel_domain::readout::StatusReadout;

use crate::config::DeviceConfig;
use crate::error::HttpAdapterError;

/// Device API over plain HTTP.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestPanelApi {
    base_url: String,
    http: reqwest::Client,
}

impl ReqwestPanelApi {
    /// Build a client for the device described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpAdapterError::InvalidBaseUrl`] when the base URL is not
    /// `http://` or `https://`, or [`HttpAdapterError::Client`] when the
    /// underlying client cannot be built.
    pub fn new(config: &DeviceConfig) -> Result<Self, HttpAdapterError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HttpAdapterError::Client)?;
        Ok(Self { base_url, http })
    }

    /// Base URL requests are sent to, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint.path());
        match endpoint.method() {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        }
    }

    async fn send(&self, endpoint: Endpoint, request: RequestBuilder) -> Result<Response, PanelError> {
        tracing::debug!(%endpoint, "sending device request");
        let response = request
            .send()
            .await
            .map_err(|err| PanelError::transport(endpoint, err))?;
        check_status(endpoint, response.status().as_u16())?;
        Ok(response)
    }
}

impl PanelApi for ReqwestPanelApi {
    async fn set_config(&self, form: &ConfigFormSubmission) -> Result<(), PanelError> {
        let endpoint = Endpoint::SetConfig;
        let request = self
            .request(endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.encode());
        self.send(endpoint, request).await?;
        Ok(())
    }

    async fn increment(&self) -> Result<(), PanelError> {
        let endpoint = Endpoint::Increment;
        self.send(endpoint, self.request(endpoint)).await?;
        Ok(())
    }

    async fn get_state(&self) -> Result<StatusReadout, PanelError> {
        let endpoint = Endpoint::GetState;
        let response = self.send(endpoint, self.request(endpoint)).await?;
        let body = response
            .bytes()
            .await
            .map_err(|err| PanelError::decode(endpoint, err))?;
        StatusReadout::from_json(&body).map_err(|err| PanelError::decode(endpoint, err))
    }

    async fn set_setpoint(&self, value: i32) -> Result<(), PanelError> {
        let endpoint = Endpoint::SetSetpoint(value);
        self.send(endpoint, self.request(endpoint)).await?;
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> Result<String, HttpAdapterError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(HttpAdapterError::InvalidBaseUrl(raw.to_string()))
    }
}
