use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::fetch_error::FetchError;

/// One upstream forecast record for a county/city.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    #[serde(rename = "locationName")]
    pub location_name: String,
    #[serde(rename = "weatherElement")]
    pub weather_element: Vec<WeatherElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherElement {
    #[serde(rename = "elementName")]
    pub element_name: String,
    #[serde(default)]
    pub time: Vec<TimeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntry {
    pub parameter: Parameter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    #[serde(rename = "parameterName")]
    pub name: String,
    #[serde(rename = "parameterUnit")]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    records: ForecastRecords,
}

#[derive(Debug, Deserialize)]
struct ForecastRecords {
    location: Vec<RawLocation>,
}

/// Client for the CWA 36-hour county forecast datastore (F-C0032-001).
#[derive(Clone)]
pub struct ForecastFetcher {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ForecastFetcher {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.forecast_url.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    /// Fetch the forecast for all counties. Fails with `MissingApiKey` before
    /// any network I/O when no key is configured; no retries on failure.
    #[instrument(skip(self), fields(url = %self.base_url))]
    pub async fn fetch_forecast(&self) -> Result<Vec<RawLocation>, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;

        debug!("Sending forecast request to CWA datastore");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("Authorization", api_key)])
            .send()
            .await?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        debug!("Retrieved forecast body, size: {} bytes", body.len());

        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        debug!(
            "Decoded forecast payload with {} locations",
            parsed.records.location.len()
        );

        Ok(parsed.records.location)
    }
}
