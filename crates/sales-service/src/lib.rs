//! Sales directory HTTP API service.
//!
//! This crate exposes the read-only query layer of `sales-store` over HTTP:
//!
//! - `GET /my-accounts` - accounts in the current user's territory
//! - `GET /third-party-accounts` - third-party accounts, optionally by campaign
//! - `GET /accounts/:account_id/job-titles` - distinct job titles at an account
//! - `GET /contacts` - contacts, optionally by account and job title
//!
//! The dataset is generated once at startup and shared read-only by every handler.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers are async by signature even when they never await
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
