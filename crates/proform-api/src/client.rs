//! HTTP client for the backend's `api/company` endpoint.
//!
//! Wraps `reqwest` with typed error handling and bearer-token attachment.
//! The backend acknowledges a created profile with any 2xx status and no
//! required response body; failures may carry `{"message": ...}` for display.

use std::time::Duration;

use reqwest::{Client, Url};

use proform_core::profile::CompanyProfile;

use crate::error::ApiError;

const COMPANY_ENDPOINT: &str = "api/company";

const USER_AGENT: &str = "proform/0.1 (company-profile-intake)";

/// Client for the company profile backend.
///
/// Holds the HTTP client and the resolved endpoint URL. Construct with the
/// configured backend base URL; tests point it at a wiremock server instead.
pub struct CompanyClient {
    client: Client,
    company_url: Url,
}

impl CompanyClient {
    /// Creates a new client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` is not a
    /// valid URL base.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let company_url = Url::parse(&normalised)
            .and_then(|base| base.join(COMPANY_ENDPOINT))
            .map_err(|e| ApiError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            company_url,
        })
    }

    /// Submits a company profile for creation.
    ///
    /// Issues one POST with the profile as the JSON body and `token` as a
    /// bearer header. A 2xx response means the record was persisted; the
    /// response body, if any, is ignored.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] on any non-2xx status, with the
    ///   server-supplied message extracted when the body is JSON with a
    ///   string `message` field.
    /// - [`ApiError::Http`] on network or TLS failure.
    pub async fn create_company(
        &self,
        profile: &CompanyProfile,
        token: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.company_url.clone())
            .bearer_auth(token)
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = %status, company = %profile.company_name, "company profile accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

/// Best-effort extraction of a server-supplied error message.
///
/// Anything that is not JSON with a string `message` field yields `None`.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}
