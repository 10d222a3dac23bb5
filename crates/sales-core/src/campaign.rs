//! Campaign filters and territory constants.

use crate::account::Account;

/// Coverage id reported with the current user's territory.
pub const TERRITORY_COVERAGE_ID: &str = "COV-001";

/// Client status reported with the current user's territory.
pub const CLIENT_STATUS: &str = "Active";

/// Revenue an account must exceed to qualify for Tech Transformation.
pub const TECH_REVENUE_THRESHOLD: u64 = 5_000_000;

/// States targeted by High Value Outreach.
pub const HIGH_VALUE_STATES: [&str; 2] = ["CA", "NY"];

/// A named predicate applied on top of the third-party account set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campaign {
    /// Third-party accounts with revenue above [`TECH_REVENUE_THRESHOLD`].
    TechTransformation,
    /// Third-party accounts in [`HIGH_VALUE_STATES`].
    HighValueOutreach,
}

impl Campaign {
    /// Look up a campaign by display name, ignoring case.
    ///
    /// Whitespace is significant: `" Tech Transformation"` is not recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "tech transformation" => Some(Self::TechTransformation),
            "high value outreach" => Some(Self::HighValueOutreach),
            _ => None,
        }
    }

    /// Display name of the campaign.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TechTransformation => "Tech Transformation",
            Self::HighValueOutreach => "High Value Outreach",
        }
    }

    /// Whether an account satisfies the campaign's predicate.
    ///
    /// Only the campaign's own condition is checked, not `is_third_party`.
    #[must_use]
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            Self::TechTransformation => account.revenue > TECH_REVENUE_THRESHOLD,
            Self::HighValueOutreach => HIGH_VALUE_STATES.contains(&account.state.as_str()),
        }
    }
}

/// Compare two strings after lower-casing both.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
