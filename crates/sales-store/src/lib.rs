//! In-memory dataset and query layer for the sales directory.
//!
//! The dataset is generated once from a [`Catalog`] and a seed, then only read.
//!
//! # Example
//!
//! ```
//! use sales_store::{query, Catalog, MemoryStore, DEFAULT_SEED};
//!
//! let store = MemoryStore::generate(&Catalog::default(), DEFAULT_SEED).unwrap();
//!
//! let territory = query::territory_accounts(&store);
//! assert!(territory.iter().all(|a| a.id.is_odd()));
//!
//! let titles = query::job_titles_for_account(&store, "acc_9999");
//! assert!(titles.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod generator;
pub mod memory;
pub mod query;

pub use catalog::{Catalog, SourceAccount};
pub use error::{Result, StoreError};
pub use generator::{Dataset, Generator, DEFAULT_SEED};
pub use memory::MemoryStore;
pub use query::ContactFilter;

use sales_core::{Account, AccountId, Contact};

/// Read access to the account and contact collections.
///
/// Iteration follows generation order. Implementations are immutable after construction,
/// so a single instance can be shared across request handlers without locking.
pub trait Store: Send + Sync {
    /// All accounts.
    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_>;

    /// Look up an account by id.
    fn get_account(&self, id: &AccountId) -> Option<&Account>;

    /// All contacts.
    fn contacts(&self) -> Box<dyn Iterator<Item = &Contact> + '_>;

    /// Number of accounts.
    fn account_count(&self) -> usize {
        self.accounts().count()
    }

    /// Number of contacts.
    fn contact_count(&self) -> usize {
        self.contacts().count()
    }

    /// Contacts belonging to one account.
    fn contacts_for_account<'a>(
        &'a self,
        id: &'a AccountId,
    ) -> Box<dyn Iterator<Item = &'a Contact> + 'a> {
        Box::new(self.contacts().filter(move |c| c.account_id == *id))
    }
}
