//! Read operations over a [`Store`].
//!
//! Every function here is pure: it filters the store's collections and returns owned
//! copies in generation order. None of them can fail; unknown ids and unrecognized
//! campaign names produce empty or unfiltered results.

use indexmap::IndexSet;

use sales_core::{eq_ignore_case, Account, AccountId, Campaign, Contact, JobTitle};

use crate::Store;

/// Accounts in the current user's territory: those with an odd id suffix.
pub fn territory_accounts<S: Store + ?Sized>(store: &S) -> Vec<Account> {
    store
        .accounts()
        .filter(|account| account.id.is_odd())
        .cloned()
        .collect()
}

/// Third-party accounts, narrowed by a campaign when `campaign_name` names one.
///
/// Absent, empty or unrecognized names return every third-party account.
pub fn third_party_accounts<S: Store + ?Sized>(
    store: &S,
    campaign_name: Option<&str>,
) -> Vec<Account> {
    let campaign = campaign_name.and_then(Campaign::from_name);

    store
        .accounts()
        .filter(|account| account.is_third_party)
        .filter(|account| campaign.map_or(true, |c| c.matches(account)))
        .cloned()
        .collect()
}

/// Distinct job titles held by the contacts of one account.
///
/// Titles appear in the order first seen. An unknown or malformed `account_id` yields an
/// empty list.
pub fn job_titles_for_account<S: Store + ?Sized>(store: &S, account_id: &str) -> Vec<JobTitle> {
    let Ok(id) = account_id.parse::<AccountId>() else {
        return Vec::new();
    };
    if store.get_account(&id).is_none() {
        return Vec::new();
    }

    store
        .contacts_for_account(&id)
        .map(|contact| contact.job_title.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(JobTitle::from)
        .collect()
}

/// Optional filters for [`find_contacts`]. Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFilter<'a> {
    /// Keep contacts whose account id matches exactly.
    pub account_id: Option<&'a str>,
    /// Keep contacts whose job title matches, ignoring case.
    pub job_title: Option<&'a str>,
}

impl<'a> ContactFilter<'a> {
    /// Filter on account id only.
    #[must_use]
    pub const fn for_account(account_id: &'a str) -> Self {
        Self {
            account_id: Some(account_id),
            job_title: None,
        }
    }

    /// Add a job title condition.
    #[must_use]
    pub const fn with_job_title(mut self, job_title: &'a str) -> Self {
        self.job_title = Some(job_title);
        self
    }
}

/// Contacts matching every filter that is set.
pub fn find_contacts<S: Store + ?Sized>(store: &S, filter: ContactFilter<'_>) -> Vec<Contact> {
    let account_id = filter.account_id.filter(|s| !s.is_empty());
    let job_title = filter.job_title.filter(|s| !s.is_empty());

    // Ids only parse from their canonical form, so a parse failure can match nothing.
    let Ok(account_id) = account_id.map(str::parse::<AccountId>).transpose() else {
        return Vec::new();
    };

    store
        .contacts()
        .filter(|contact| account_id.map_or(true, |id| contact.account_id == id))
        .filter(|contact| job_title.map_or(true, |t| eq_ignore_case(&contact.job_title, t)))
        .cloned()
        .collect()
}
