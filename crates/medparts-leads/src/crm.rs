//! HTTP client for the CRM forms-ingestion endpoint.
//!
//! Wraps `reqwest` with the endpoint's URL scheme (portal and form
//! identifiers in the path). Only the success/failure status of the response
//! is consumed; no response schema is parsed.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::LeadError;
use crate::lead::CrmSubmission;

const DEFAULT_BASE_URL: &str = "https://api.hsforms.com/";

/// Client for submitting leads to the CRM.
///
/// Use [`CrmClient::new`] for production or [`CrmClient::with_base_url`] to
/// point at a mock server in tests.
pub struct CrmClient {
    client: Client,
    base_url: Url,
    portal_id: String,
    form_id: String,
}

impl CrmClient {
    /// Creates a client pointed at the production CRM endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(portal_id: &str, form_id: &str, timeout_secs: u64) -> Result<Self, LeadError> {
        Self::with_base_url(DEFAULT_BASE_URL, portal_id, form_id, timeout_secs)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LeadError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        base_url: &str,
        portal_id: &str,
        form_id: &str,
        timeout_secs: u64,
    ) -> Result<Self, LeadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("medparts/0.1 (parts-catalog)")
            .build()?;

        // Normalise to exactly one trailing slash so join() appends to the
        // path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|_| LeadError::InvalidBaseUrl(normalised.clone()))?;

        Ok(CrmClient {
            client,
            base_url,
            portal_id: portal_id.to_owned(),
            form_id: form_id.to_owned(),
        })
    }

    /// The full submission URL, encoding the portal and form identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::InvalidBaseUrl`] if the identifiers do not form
    /// a valid path.
    pub fn submit_url(&self) -> Result<Url, LeadError> {
        self.base_url
            .join(&format!(
                "submissions/v3/integration/submit/{}/{}",
                self.portal_id, self.form_id
            ))
            .map_err(|_| LeadError::InvalidBaseUrl(self.base_url.to_string()))
    }

    /// Posts a lead submission. Consumes only the response status: 2xx is
    /// success, anything else is a transport failure the caller may retry.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Http`] on network failure or a non-2xx status.
    pub async fn submit(&self, submission: &CrmSubmission) -> Result<(), LeadError> {
        let url = self.submit_url()?;
        let response = self.client.post(url).json(submission).send().await?;
        response.error_for_status()?;
        tracing::info!(portal = %self.portal_id, "lead submitted to CRM");
        Ok(())
    }
}
