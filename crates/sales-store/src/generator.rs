//! Seeded expansion of a [`Catalog`] into accounts and contacts.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sales_core::{Account, AccountId, Contact, ContactId};

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Fewest contacts generated per account.
pub const MIN_CONTACTS_PER_ACCOUNT: u32 = 1;

/// Most contacts generated per account.
pub const MAX_CONTACTS_PER_ACCOUNT: u32 = 3;

/// Accounts and contacts in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Accounts keyed by id.
    pub accounts: IndexMap<AccountId, Account>,
    /// Contacts keyed by id.
    pub contacts: IndexMap<ContactId, Contact>,
}

/// Generator for the account and contact collections.
///
/// Draw order is fixed: per account the contact count, then per contact the first name,
/// last name and job title. The same seed and catalog always yield the same dataset.
pub struct Generator<'a> {
    catalog: &'a Catalog,
    rng: StdRng,
    next_contact: u32,
}

impl<'a> Generator<'a> {
    /// Create a generator over a catalog with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCatalog`] if any list in the catalog is empty.
    pub fn new(catalog: &'a Catalog, seed: u64) -> Result<Self> {
        catalog.validate()?;

        Ok(Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
            next_contact: 1,
        })
    }

    /// Expand the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has more accounts or contacts than ids can number.
    pub fn generate(mut self) -> Result<Dataset> {
        let accounts = self.generate_accounts()?;

        let mut contacts = IndexMap::new();
        for account in accounts.values() {
            let count = self
                .rng
                .gen_range(MIN_CONTACTS_PER_ACCOUNT..=MAX_CONTACTS_PER_ACCOUNT);
            for _ in 0..count {
                let contact = self.generate_contact(account)?;
                contacts.insert(contact.id, contact);
            }
        }

        tracing::debug!(
            accounts = accounts.len(),
            contacts = contacts.len(),
            "Generated dataset"
        );

        Ok(Dataset { accounts, contacts })
    }

    fn generate_accounts(&self) -> Result<IndexMap<AccountId, Account>> {
        self.catalog
            .accounts
            .iter()
            .enumerate()
            .map(|(index, source)| -> Result<(AccountId, Account)> {
                let sequence = u32::try_from(index + 1)
                    .map_err(|_| StoreError::InvalidCatalog("too many accounts".into()))?;
                let account = Account {
                    id: AccountId::from_sequence(sequence)?,
                    name: source.name.clone(),
                    state: source.state.clone(),
                    revenue: source.revenue,
                    is_third_party: sequence % 2 == 0,
                };
                Ok((account.id, account))
            })
            .collect()
    }

    fn generate_contact(&mut self, account: &Account) -> Result<Contact> {
        let id = ContactId::from_sequence(self.next_contact)?;
        self.next_contact = self
            .next_contact
            .checked_add(1)
            .ok_or_else(|| StoreError::InvalidCatalog("too many contacts".into()))?;

        let catalog = self.catalog;
        let first_name = pick(&mut self.rng, &catalog.first_names);
        let last_name = pick(&mut self.rng, &catalog.last_names);
        let job_title = pick(&mut self.rng, &catalog.job_titles);

        Ok(Contact {
            id,
            name: format!("{first_name} {last_name}"),
            email: Contact::email_for(first_name, last_name, account),
            account_id: account.id,
            job_title: job_title.to_string(),
        })
    }
}

/// Uniform choice from a list the catalog has already checked is non-empty.
fn pick<'c>(rng: &mut StdRng, items: &'c [String]) -> &'c str {
    &items[rng.gen_range(0..items.len())]
}
