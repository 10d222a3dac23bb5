//! Identifier types for the sales directory.
//!
//! Accounts and contacts are numbered sequentially at generation time and rendered as
//! `acc_<N>` / `con_<N>`. Parsing only accepts the canonical rendering, so two ids compare
//! equal exactly when their strings do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ACCOUNT_PREFIX: &str = "acc_";
const CONTACT_PREFIX: &str = "con_";

/// An account identifier (`acc_<N>`, N starting at 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(u32);

impl AccountId {
    /// Create an `AccountId` from its 1-based sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::ZeroSequence`] for 0.
    pub const fn from_sequence(sequence: u32) -> Result<Self, IdError> {
        if sequence == 0 {
            return Err(IdError::ZeroSequence);
        }
        Ok(Self(sequence))
    }

    /// Return the numeric suffix of the id.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.0
    }

    /// Whether the numeric suffix is odd.
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.0 % 2 != 0
    }
}

impl FromStr for AccountId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequence(s, ACCOUNT_PREFIX).map(Self)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ACCOUNT_PREFIX}{}", self.0)
    }
}

impl TryFrom<String> for AccountId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.to_string()
    }
}

/// A contact identifier (`con_<N>`), sequential across all accounts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(u32);

impl ContactId {
    /// Create a `ContactId` from its 1-based sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::ZeroSequence`] for 0.
    pub const fn from_sequence(sequence: u32) -> Result<Self, IdError> {
        if sequence == 0 {
            return Err(IdError::ZeroSequence);
        }
        Ok(Self(sequence))
    }

    /// Return the numeric suffix of the id.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.0
    }
}

impl FromStr for ContactId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequence(s, CONTACT_PREFIX).map(Self)
    }
}

impl fmt::Debug for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactId({self})")
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTACT_PREFIX}{}", self.0)
    }
}

impl TryFrom<String> for ContactId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.to_string()
    }
}

/// Parse `<prefix><digits>` where the digits have no sign and no leading zero.
fn parse_sequence(s: &str, prefix: &'static str) -> Result<u32, IdError> {
    let digits = s
        .strip_prefix(prefix)
        .ok_or(IdError::MissingPrefix(prefix))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdError::InvalidSequence);
    }
    if digits.starts_with('0') {
        // "acc_0" and "acc_01" are not canonical renderings of any id
        return Err(if digits.len() == 1 {
            IdError::ZeroSequence
        } else {
            IdError::InvalidSequence
        });
    }

    digits.parse().map_err(|_| IdError::InvalidSequence)
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input does not start with the expected prefix.
    #[error("identifier must start with `{0}`")]
    MissingPrefix(&'static str),

    /// The suffix is not a canonical decimal number.
    #[error("invalid sequence number")]
    InvalidSequence,

    /// Sequence numbers start at 1.
    #[error("sequence number must be at least 1")]
    ZeroSequence,
}
