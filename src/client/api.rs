use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use std::fs::OpenOptions;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::client::{BodySource, Credential};
use crate::config::{ApiConfig, LoggingConfig};
use crate::error::{Result, ViewerError};
use crate::models::*;

#[derive(Clone)]
pub struct PlanetClient {
    client: reqwest::Client,
    api: ApiConfig,
    api_logging: bool,
    api_log_path: String,
}

impl PlanetClient {
    pub fn new(api: ApiConfig, logging: &LoggingConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if api.request_timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(api.request_timeout_seconds));
        }
        let client = builder.build()?;

        Ok(PlanetClient {
            client,
            api,
            api_logging: logging.api_logging,
            api_log_path: logging.api_log_path.clone(),
        })
    }

    pub fn set_api_logging(&mut self, logging: bool) {
        self.api_logging = logging;
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: Option<&str>) {
        if !self.api_logging {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            timestamp = timestamp,
            method = method,
            url = url,
            response_status = response_status,
            response_body = response_body.unwrap_or("Not captured")
        );

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.api_log_path)
        {
            let _ = file.write_all(log_entry.as_bytes());
        }
    }

    /// Read the response, failing with the status code on anything but 2xx.
    async fn read_success(&self, method: &str, url: &str, response: reqwest::Response) -> Result<String> {
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call(method, url, status, Some(&error_body));
            return Err(ViewerError::Request { status });
        }

        let response_text = response.text().await?;
        self.log_api_call(method, url, status, Some(&response_text));
        Ok(response_text)
    }

    // Key issuance
    pub async fn issue_key(&self) -> Result<Credential> {
        let url = self.api.keys_url();
        debug!("🌐 API: POST {}", url);

        let response = self.client.post(&url).send().await?;
        let response_text = self.read_success("POST", &url, response).await?;

        let key_response = KeyResponse::parse(&response_text)?;
        debug!("🔑 Fetched API key ({} chars)", key_response.key.len());
        Ok(Credential::new(key_response.key))
    }

    // Body list
    pub async fn get_bodies(&self, credential: &Credential) -> Result<Vec<Body>> {
        let url = self.api.bodies_url();
        debug!("🌐 API: GET {}", url);

        let header_name = HeaderName::from_bytes(self.api.key_header.as_bytes())
            .map_err(|e| ViewerError::InvalidConfig(format!("key_header: {}", e)))?;
        let header_value = HeaderValue::from_str(credential.as_str())
            .map_err(|_| ViewerError::format("API key is not a valid header value"))?;

        let response = self
            .client
            .get(&url)
            .header(header_name, header_value)
            .send()
            .await?;
        let response_text = self.read_success("GET", &url, response).await?;

        let bodies_response = BodiesResponse::parse(&response_text)?;
        let bodies = bodies_response.into_bodies()?;
        debug!("🪐 Received {} bodies", bodies.len());
        Ok(bodies)
    }
}

#[async_trait]
impl BodySource for PlanetClient {
    async fn fetch_key(&self) -> Result<Credential> {
        self.issue_key().await
    }

    async fn fetch_bodies(&self, credential: &Credential) -> Result<Vec<Body>> {
        self.get_bodies(credential).await
    }
}
