//! Person (entry) type - the fundamental unit of the family tree

use serde::{Deserialize, Serialize};

/// Unique identifier for a person within a forest
///
/// Ids are assigned by the engine from a global, monotonic allocator:
/// a fresh id is larger than every id anywhere in the forest, and an id
/// is never reused after its entry is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn new(id: u64) -> Self {
        PersonId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The next id after this one
    pub fn next(&self) -> Self {
        PersonId(self.0 + 1)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        PersonId(id)
    }
}

impl From<&PersonId> for PersonId {
    fn from(id: &PersonId) -> Self {
        *id
    }
}

/// A person - one entry in the family tree
///
/// Entries own their children outright, so a forest is a plain value:
/// cloning a subtree never aliases another one and cycles are
/// unrepresentable. The serialized form is the record
/// `{id, name, expanded, children}`, nested recursively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable engine-assigned identity, unique across the whole forest
    pub id: PersonId,

    /// Display name; non-empty after trimming
    pub name: String,

    /// Whether the entry's children are currently shown
    pub expanded: bool,

    /// Ordered children; new entries are appended, never sorted
    pub children: Vec<Person>,
}

impl Person {
    /// Create a new collapsed, childless entry
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Person {
            id: id.into(),
            name: name.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Set the expanded flag
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Person) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this entry has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Ids of this entry and every descendant, pre-order
    pub fn subtree_ids(&self) -> Vec<PersonId> {
        let mut ids = vec![self.id];
        for child in &self.children {
            ids.extend(child.subtree_ids());
        }
        ids
    }

    /// Number of descendants below this entry
    pub fn descendant_count(&self) -> usize {
        self.subtree_ids().len() - 1
    }
}
