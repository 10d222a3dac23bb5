//! Sales Directory Client SDK.
//!
//! Typed access to the sales directory HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use sales_client::{ContactQuery, SalesClient};
//!
//! # async fn example() -> Result<(), sales_client::ClientError> {
//! let client = SalesClient::new("http://sales-directory:8080")?;
//!
//! let territory = client.my_accounts().await?;
//! println!("{} accounts under {}", territory.accounts.len(), territory.coverage_id);
//!
//! let engineers = client
//!     .contacts(&ContactQuery::for_account("acc_1").with_job_title("software engineer"))
//!     .await?;
//! println!("{} engineers at acc_1", engineers.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, SalesClient};
pub use error::ClientError;
pub use types::*;
