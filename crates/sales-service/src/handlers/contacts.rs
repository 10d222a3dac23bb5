//! Contact handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use sales_core::Contact;
use sales_store::{query, ContactFilter};

use super::{last_value, QueryPairs};
use crate::error::ApiError;
use crate::state::AppState;

/// Contact search query parameters.
#[derive(Debug, Default)]
pub struct ContactsQuery {
    /// Exact account id.
    pub account_id: Option<String>,
    /// Job title, matched ignoring case.
    pub job_title: Option<String>,
}

impl From<QueryPairs> for ContactsQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            account_id: last_value(&pairs, "account_id"),
            job_title: last_value(&pairs, "job_title"),
        }
    }
}

/// A list of contacts.
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    /// Matching contacts in generation order.
    pub contacts: Vec<Contact>,
}

/// List contacts, optionally filtered by account and job title.
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<ContactsResponse>, ApiError> {
    let Query(pairs) = params?;
    let params = ContactsQuery::from(pairs);
    let filter = ContactFilter {
        account_id: params.account_id.as_deref(),
        job_title: params.job_title.as_deref(),
    };
    let contacts = query::find_contacts(state.store.as_ref(), filter);

    tracing::debug!(
        account_id = ?params.account_id,
        job_title = ?params.job_title,
        count = contacts.len(),
        "Listed contacts"
    );

    Ok(Json(ContactsResponse { contacts }))
}
