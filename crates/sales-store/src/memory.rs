//! Insertion-ordered in-memory store.

use indexmap::IndexMap;

use sales_core::{Account, AccountId, Contact, ContactId};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::generator::{Dataset, Generator};
use crate::Store;

/// [`Store`] backed by two insertion-ordered maps.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    accounts: IndexMap<AccountId, Account>,
    contacts: IndexMap<ContactId, Contact>,
}

impl MemoryStore {
    /// Generate the dataset from a catalog and seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is invalid.
    pub fn generate(catalog: &Catalog, seed: u64) -> Result<Self> {
        let dataset = Generator::new(catalog, seed)?.generate()?;

        tracing::info!(
            seed,
            accounts = dataset.accounts.len(),
            contacts = dataset.contacts.len(),
            "Sales dataset ready"
        );

        Ok(Self::from(dataset))
    }
}

impl From<Dataset> for MemoryStore {
    fn from(dataset: Dataset) -> Self {
        Self {
            accounts: dataset.accounts,
            contacts: dataset.contacts,
        }
    }
}

impl Store for MemoryStore {
    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_> {
        Box::new(self.accounts.values())
    }

    fn get_account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    fn contacts(&self) -> Box<dyn Iterator<Item = &Contact> + '_> {
        Box::new(self.contacts.values())
    }

    fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::DEFAULT_SEED;

    #[test]
    fn generate_builds_both_collections() {
        let store = MemoryStore::generate(&Catalog::default(), DEFAULT_SEED).unwrap();

        assert_eq!(store.account_count(), 100);
        assert!((100..=300).contains(&store.contact_count()));
        assert_eq!(store.accounts().count(), store.account_count());
        assert_eq!(store.contacts().count(), store.contact_count());
    }

    #[test]
    fn lookups_by_id() {
        let store = MemoryStore::generate(&Catalog::default(), DEFAULT_SEED).unwrap();

        let acc = AccountId::from_sequence(1).unwrap();
        assert_eq!(store.get_account(&acc).unwrap().name, "Apex Industries");
        assert!(store
            .get_account(&AccountId::from_sequence(101).unwrap())
            .is_none());

        let first = store.contacts().next().unwrap();
        assert_eq!(first.account_id, acc);
    }

    #[test]
    fn contacts_for_account_filters_by_owner() {
        let store = MemoryStore::generate(&Catalog::default(), DEFAULT_SEED).unwrap();
        let acc = AccountId::from_sequence(5).unwrap();

        let contacts: Vec<_> = store.contacts_for_account(&acc).collect();
        assert!(!contacts.is_empty());
        assert!(contacts.iter().all(|c| c.account_id == acc));
    }
}
