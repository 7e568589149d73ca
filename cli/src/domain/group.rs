//! Host groups as loaded from the hosts file.
//!
//! Names and member tokens are case-insensitive; both are folded to lowercase
//! on construction so lookups can compare plain strings.

/// Group holding the keys that appear before any section header.
pub const DEFAULT_GROUP: &str = "default";

/// A named, ordered collection of host tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    members: Vec<String>,
}

impl Group {
    pub fn new<I, S>(name: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: fold(name),
            members: members.into_iter().map(|m| fold(m.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member tokens in file order, duplicates included.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// Every group defined for a run, in file order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSet {
    groups: Vec<Group>,
}

impl GroupSet {
    #[must_use]
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(Group::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Group> for GroupSet {
    fn from_iter<T: IntoIterator<Item = Group>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Case-fold a group name, member token or operator identifier.
#[must_use]
pub fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}
