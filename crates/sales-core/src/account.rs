//! Account and contact records.

use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, ContactId};

/// A sales account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Sequential account id (`acc_<N>`).
    pub id: AccountId,

    /// Company name.
    pub name: String,

    /// Two-letter region code.
    pub state: String,

    /// Annual revenue in whole dollars.
    pub revenue: u64,

    /// Whether the account was sourced from a third-party provider.
    #[serde(default)]
    pub is_third_party: bool,
}

impl Account {
    /// First space-separated word of the company name, used as the email domain.
    ///
    /// `"Innovate Inc."` yields `"Innovate"`. A name starting with a space yields `""`.
    #[must_use]
    pub fn domain_word(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}

/// A person at an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Sequential contact id (`con_<N>`).
    pub id: ContactId,

    /// Display name, `"<first> <last>"`.
    pub name: String,

    /// Derived email address.
    pub email: String,

    /// The account this contact belongs to.
    pub account_id: AccountId,

    /// Job title.
    pub job_title: String,
}

impl Contact {
    /// Build the email address for a contact.
    ///
    /// Every `.` is stripped from the assembled address, including the one before `com`,
    /// so `Alice Johnson` at `Apex Industries` becomes `alicejohnson@apexcom`.
    #[must_use]
    pub fn email_for(first_name: &str, last_name: &str, account: &Account) -> String {
        format!(
            "{}.{}@{}.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            account.domain_word().to_lowercase()
        )
        .replace('.', "")
    }
}

/// A job title wrapper, as returned by the job-titles endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobTitle {
    /// The title text.
    pub title: String,
}

impl From<&str> for JobTitle {
    fn from(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}
