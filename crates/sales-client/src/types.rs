//! Request and response types for the sales directory client.

use serde::{Deserialize, Serialize};

use sales_core::{Account, Contact, JobTitle};

/// Response of `GET /my-accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyAccountsResponse {
    /// Accounts in the caller's territory.
    pub accounts: Vec<Account>,
    /// Coverage assignment id.
    pub coverage_id: String,
    /// Client status.
    pub client_status: String,
}

/// Response of `GET /third-party-accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsResponse {
    /// Matching accounts.
    pub accounts: Vec<Account>,
}

/// Response of `GET /accounts/:account_id/job-titles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTitlesResponse {
    /// Distinct job titles.
    pub job_titles: Vec<JobTitle>,
}

/// Response of `GET /contacts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsResponse {
    /// Matching contacts.
    pub contacts: Vec<Contact>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Number of accounts loaded.
    pub accounts: usize,
    /// Number of contacts loaded.
    pub contacts: usize,
}

/// Filters for `GET /contacts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Exact account id.
    pub account_id: Option<String>,
    /// Job title, matched ignoring case by the server.
    pub job_title: Option<String>,
}

impl ContactQuery {
    /// Filter on one account.
    #[must_use]
    pub fn for_account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            job_title: None,
        }
    }

    /// Add a job title filter.
    #[must_use]
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub(crate) fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("account_id", self.account_id.as_deref()),
            ("job_title", self.job_title.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// API error response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// API error details.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
