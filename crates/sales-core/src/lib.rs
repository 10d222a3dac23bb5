//! Core types for the sales directory.
//!
//! This crate provides the domain types shared by the store, the HTTP service and the client:
//!
//! - **Identifiers**: `AccountId`, `ContactId`
//! - **Records**: `Account`, `Contact`, `JobTitle`
//! - **Filters**: `Campaign`, plus the territory constants returned with "my accounts"
//!
//! Records are plain data. All filtering lives in `sales-store`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod campaign;
pub mod ids;

pub use account::{Account, Contact, JobTitle};
pub use campaign::{
    eq_ignore_case, Campaign, CLIENT_STATUS, HIGH_VALUE_STATES, TECH_REVENUE_THRESHOLD,
    TERRITORY_COVERAGE_ID,
};
pub use ids::{AccountId, ContactId, IdError};
