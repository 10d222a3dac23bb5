//! Account handlers.

use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use sales_core::{Account, Campaign, JobTitle, CLIENT_STATUS, TERRITORY_COVERAGE_ID};
use sales_store::query;

use super::{last_value, QueryPairs};
use crate::error::ApiError;
use crate::state::AppState;

/// Accounts in the current user's territory.
#[derive(Debug, Serialize)]
pub struct MyAccountsResponse {
    /// Territory accounts in generation order.
    pub accounts: Vec<Account>,
    /// Coverage assignment id.
    pub coverage_id: String,
    /// Client status.
    pub client_status: String,
}

/// A list of accounts.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    /// Matching accounts in generation order.
    pub accounts: Vec<Account>,
}

/// Distinct job titles at an account.
#[derive(Debug, Serialize)]
pub struct JobTitlesResponse {
    /// Job titles, without duplicates.
    pub job_titles: Vec<JobTitle>,
}

/// Third-party account query parameters.
#[derive(Debug, Default)]
pub struct ThirdPartyQuery {
    /// Optional campaign name, matched ignoring case.
    pub campaign_name: Option<String>,
}

impl From<QueryPairs> for ThirdPartyQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            campaign_name: last_value(&pairs, "campaign_name"),
        }
    }
}

/// List the accounts in the current user's territory.
pub async fn get_my_accounts(State(state): State<Arc<AppState>>) -> Json<MyAccountsResponse> {
    let accounts = query::territory_accounts(state.store.as_ref());

    tracing::debug!(count = accounts.len(), "Listed territory accounts");

    Json(MyAccountsResponse {
        accounts,
        coverage_id: TERRITORY_COVERAGE_ID.to_string(),
        client_status: CLIENT_STATUS.to_string(),
    })
}

/// List third-party accounts, narrowed by campaign when one is named.
pub async fn get_third_party_accounts(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<AccountsResponse>, ApiError> {
    let Query(pairs) = params?;
    let params = ThirdPartyQuery::from(pairs);
    let campaign_name = params.campaign_name.as_deref();
    let accounts = query::third_party_accounts(state.store.as_ref(), campaign_name);

    tracing::debug!(
        campaign_name = ?campaign_name,
        campaign = ?campaign_name.and_then(Campaign::from_name).as_ref().map(Campaign::name),
        count = accounts.len(),
        "Listed third-party accounts"
    );

    Ok(Json(AccountsResponse { accounts }))
}

/// List the distinct job titles held by an account's contacts.
///
/// An unknown account yields an empty list, not an error.
pub async fn get_job_titles(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<JobTitlesResponse>, ApiError> {
    let Path(account_id) = path?;
    let job_titles = query::job_titles_for_account(state.store.as_ref(), &account_id);

    tracing::debug!(
        account_id = %account_id,
        count = job_titles.len(),
        "Listed job titles"
    );

    Ok(Json(JobTitlesResponse { job_titles }))
}
