//! Identifier resolution: turns operator identifiers into a target list.
//!
//! Every identifier is checked against every group: a match on the group name
//! expands to its members, a match on a member token selects the token itself.
//! Matching both ways is rejected, matching neither is rejected, and the first
//! rejection aborts the whole resolution.

use std::collections::HashSet;

use crate::domain::error::SaError;
use crate::domain::group::{GroupSet, fold};

/// How an identifier was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Named a group; expanded to the group's members.
    Group,
    /// Named a member token of at least one group.
    Host,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Group => f.write_str("group"),
            Self::Host => f.write_str("host"),
        }
    }
}

/// Successful resolution of a full identifier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Deduplicated targets, first occurrence wins.
    pub targets: Vec<String>,
    /// Classification of each identifier, in argument order.
    pub classified: Vec<(String, Classification)>,
}

/// Classify one identifier and return what it expands to (before dedup).
///
/// # Errors
///
/// `AmbiguousIdentifier` when it is both a group name and a member token,
/// `UnknownIdentifier` when it is neither.
pub fn classify(
    groups: &GroupSet,
    identifier: &str,
) -> Result<(Classification, Vec<String>), SaError> {
    let id = fold(identifier);
    let mut expanded = Vec::new();
    let mut is_group = false;
    let mut is_host = false;

    for group in groups.iter() {
        if group.name() == id {
            is_group = true;
            expanded.extend(group.members().iter().cloned());
        }
        for member in group.members() {
            if *member == id {
                is_host = true;
                expanded.push(id.clone());
            }
        }
    }

    match (is_group, is_host) {
        (true, true) => Err(SaError::AmbiguousIdentifier(id)),
        (true, false) => Ok((Classification::Group, expanded)),
        (false, true) => Ok((Classification::Host, expanded)),
        (false, false) => Err(SaError::UnknownIdentifier(id)),
    }
}

/// Resolve identifiers into an ordered, duplicate-free target list.
///
/// # Errors
///
/// Returns the first `AmbiguousIdentifier` or `UnknownIdentifier` hit; no
/// partial result is produced.
pub fn resolve_targets<S: AsRef<str>>(
    groups: &GroupSet,
    identifiers: &[S],
) -> Result<Resolution, SaError> {
    let mut working = Vec::new();
    let mut classified = Vec::with_capacity(identifiers.len());

    for identifier in identifiers {
        let (class, expanded) = classify(groups, identifier.as_ref())?;
        classified.push((fold(identifier.as_ref()), class));
        working.extend(expanded);
    }

    Ok(Resolution {
        targets: dedup_stable(working),
        classified,
    })
}

/// Drop repeated entries, keeping the first occurrence and relative order.
#[must_use]
pub fn dedup_stable(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
