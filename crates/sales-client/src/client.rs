//! Sales directory HTTP client implementation.

use reqwest::{Client, Url};
use std::time::Duration;

use sales_core::{Account, Contact, JobTitle};

use crate::error::ClientError;
use crate::types::{
    AccountsResponse, ApiErrorResponse, ContactQuery, ContactsResponse, HealthResponse,
    JobTitlesResponse, MyAccountsResponse,
};

/// Sales directory API client.
#[derive(Debug, Clone)]
pub struct SalesClient {
    client: Client,
    base_url: Url,
}

impl SalesClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the service (e.g., `"http://sales-directory:8080"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl AsRef<str>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let raw = base_url.as_ref().trim_end_matches('/');
        let base_url = Url::parse(raw)
            .map_err(|e| ClientError::Configuration(format!("invalid base URL {raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "base URL cannot have paths appended: {raw}"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Get the accounts in the caller's territory.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn my_accounts(&self) -> Result<MyAccountsResponse, ClientError> {
        self.get(self.url(&["my-accounts"])).await
    }

    /// Get third-party accounts, optionally narrowed by a campaign name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn third_party_accounts(
        &self,
        campaign_name: Option<&str>,
    ) -> Result<Vec<Account>, ClientError> {
        let mut url = self.url(&["third-party-accounts"]);
        if let Some(name) = campaign_name {
            url.query_pairs_mut().append_pair("campaign_name", name);
        }

        let response: AccountsResponse = self.get(url).await?;
        Ok(response.accounts)
    }

    /// Get the distinct job titles at an account.
    ///
    /// An unknown account yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn job_titles(&self, account_id: &str) -> Result<Vec<JobTitle>, ClientError> {
        let url = self.url(&["accounts", account_id, "job-titles"]);

        let response: JobTitlesResponse = self.get(url).await?;
        Ok(response.job_titles)
    }

    /// Search contacts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn contacts(&self, query: &ContactQuery) -> Result<Vec<Contact>, ClientError> {
        let mut url = self.url(&["contacts"]);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }
        // An empty serializer still leaves a trailing `?`
        if url.query() == Some("") {
            url.set_query(None);
        }

        let response: ContactsResponse = self.get(url).await?;
        Ok(response.contacts)
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get(self.url(&["health"])).await
    }

    /// Join percent-encoded path segments onto the base URL.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        match response.json::<ApiErrorResponse>().await {
            Ok(api_error) => Err(ClientError::Api {
                code: api_error.error.code,
                message: api_error.error.message,
                status: status.as_u16(),
            }),
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
