//! API handlers.

pub mod accounts;
pub mod contacts;
pub mod health;

/// Query-string pairs in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Value of the last occurrence of `key`; a repeated parameter keeps its final value.
fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
