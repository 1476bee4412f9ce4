//! # Aeon environment state
//!
//! This module defines [`crate::env_state::AeonEnv`], the **shared environment object** used across
//! the `Aeon` library. It provides access to a persistent **HTTP client** (for the geocoding
//! and ephemeris services) configured with a fixed User-Agent and a global request timeout.
//!
//! This object is designed to be **cheaply cloneable** and passed to the providers
//! that need access to external data sources.
use std::time::Duration;

use reqwest::{Client, Response};

use crate::aeon_errors::AeonError;

/// User-Agent sent with every outgoing request. Nominatim rejects anonymous clients.
const USER_AGENT: &str = "AeonTemporalNavigator/1.0";

/// Global timeout applied to every request made through the shared client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// This object is passed to the various providers in the library
/// to give them access to the shared HTTP session.
///
/// # Fields
///
/// * `http_client` - A reqwest client used to make HTTP requests
#[derive(Debug, Clone)]
pub struct AeonEnv {
    pub http_client: Client,
}

impl AeonEnv {
    /// Create a new environment with the default HTTP client settings.
    pub fn new() -> Result<Self, AeonError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(AeonEnv { http_client })
    }

    /// Perform a GET request with the given query parameters and return the raw response.
    pub(crate) async fn get_with_query(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        self.http_client.get(url).query(query).send().await
    }

    /// Perform a POST request with a form-encoded body and return the raw response.
    pub(crate) async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        self.http_client.post(url).form(form).send().await
    }
}
