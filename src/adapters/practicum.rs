//! Homework status API over HTTP
//!
//! `GET {endpoint}?from_date={ts}` with `Authorization: OAuth {token}`.

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::core::ports::ReviewApi;
use crate::error::RelayError;

/// Blocking client for the homework status endpoint
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client for `endpoint` authenticated with `token`
    #[must_use]
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Endpoint this client polls
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: &impl std::fmt::Display) -> RelayError {
        RelayError::Transport {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        }
    }

    fn request_url(&self, from_date: i64) -> Result<Url, RelayError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| self.transport_error(&e))?;
        url.query_pairs_mut().append_pair("from_date", &from_date.to_string());
        Ok(url)
    }
}

impl ReviewApi for PracticumClient {
    fn fetch_statuses(&self, from_date: i64) -> Result<Value, RelayError> {
        log::debug!("Api request started: {} from_date={from_date}", self.endpoint);

        let response = self
            .client
            .get(self.request_url(from_date)?)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .map_err(|e| {
                log::error!("API request error: {e}");
                self.transport_error(&e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("{} status code {status}", self.endpoint);
            return Err(RelayError::HttpStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| self.transport_error(&e))?;
        let value = serde_json::from_str(&body).map_err(|e| RelayError::Decode(e.to_string()))?;
        log::debug!("Api request finished");
        Ok(value)
    }
}
