use std::env;

pub const DEFAULT_FORECAST_URL: &str =
    "https://opendata.cwa.gov.tw/api/v1/rest/datastore/F-C0032-001";

#[derive(Debug, Clone)]
pub struct Config {
    /// CWA open data platform authorization key. Absence is reported per
    /// request, not at startup, so the service still boots without one.
    pub api_key: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub forecast_url: String,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            api_key: env::var("CWA_API_KEY").ok().filter(|k| !k.is_empty()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            forecast_url: env::var("FORECAST_URL")
                .unwrap_or_else(|_| DEFAULT_FORECAST_URL.to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
