//! # Canonical Ordering & Dedup
//!
//! Puts a set of user-supplied spellings in a fixed order and drops exact
//! duplicates, so the order notes were clicked in never matters downstream.
//!
//! ## Ordering
//! - Parseable tokens first, by letter (`C` … `B`), then accidental (`bb` < `b` < natural < `#` < `##`)
//! - Tokens that do not parse come last, compared as plain strings
//!
//! ## Dedup
//! Valid tokens are rewritten to their canonical form, so `c` and `C` collapse.
//! Nothing else is merged: `C#` and `Db` are different spellings and both stay.

use crate::normalize::normalize;
use crate::note::{Accidental, Letter};
use crate::parser::parse;
use std::cmp::Ordering;

/// Sort key for one token. Variant order puts every spelled note before any unparsed token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Spelled(Letter, Accidental),
    Unparsed(String),
}

/// Normalized token paired with its sort key
fn keyed(token: &str) -> (SortKey, String) {
    match parse(token) {
        Ok(note) => (
            SortKey::Spelled(note.letter(), note.accidental()),
            note.spelling().to_string(),
        ),
        Err(_) => {
            let normalized = normalize(token);
            (SortKey::Unparsed(normalized.clone()), normalized)
        }
    }
}

/// Total order over spellings, usable with `sort_by`.
///
/// ```
/// use diatonic::compare_spellings;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_spellings("C#", "Db"), Ordering::Less);
/// assert_eq!(compare_spellings("Bb", "B"), Ordering::Less);
/// assert_eq!(compare_spellings("B##", "zzz"), Ordering::Less);
/// ```
pub fn compare_spellings(a: &str, b: &str) -> Ordering {
    keyed(a).cmp(&keyed(b))
}

/// Normalize, order and deduplicate `tokens`.
///
/// Unparseable tokens are kept (after normalization); use
/// [`canonicalize_with_policy`](crate::canonicalize_with_policy) to drop or reject them.
///
/// ```
/// use diatonic::canonicalize;
///
/// assert_eq!(canonicalize(["G", "C#", "Bb", "E"]), vec!["C#", "E", "G", "Bb"]);
/// assert_eq!(canonicalize(["C#", "Db", "c#"]), vec!["C#", "Db"]);
/// ```
pub fn canonicalize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<(SortKey, String)> =
        tokens.into_iter().map(|t| keyed(t.as_ref())).collect();
    entries.sort();
    entries.dedup();
    entries.into_iter().map(|(_, spelling)| spelling).collect()
}
