//! High-level session API
//!
//! This module provides the main entry point for editing a family tree.
//! `FamilyTree` is the single-writer container for the canonical forest:
//! every mutation goes through a pure op and the held snapshot is replaced
//! wholesale with the op's result, so callers only ever observe complete
//! forest values.

use std::path::Path;

use crate::model::{Person, PersonId};
use crate::ops;
use crate::{Error, Result};

/// The main session interface
///
/// Wraps a forest of root entries and layers caller-side validation on
/// top of the engine ops: blank names and unknown ids are reported as
/// typed errors here instead of the engine's silent no-ops, and the last
/// remaining root cannot be deleted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FamilyTree {
    roots: Vec<Person>,
}

impl FamilyTree {
    /// Create an empty tree
    pub fn new() -> Self {
        FamilyTree { roots: Vec::new() }
    }

    /// Wrap an existing forest
    pub fn from_roots(roots: Vec<Person>) -> Self {
        FamilyTree { roots }
    }

    /// The demo family the interactive interface ships with
    pub fn sample() -> Self {
        let roots = vec![
            Person::new(1, "John Smith")
                .with_expanded(true)
                .with_child(
                    Person::new(2, "Michael Smith")
                        .with_child(Person::new(5, "David Smith"))
                        .with_child(Person::new(6, "Emma Smith")),
                )
                .with_child(
                    Person::new(3, "Sarah Smith").with_child(Person::new(7, "Oliver Johnson")),
                ),
            Person::new(4, "Mary Williams"),
        ];
        FamilyTree { roots }
    }

    // === Queries ===

    /// The current snapshot
    ///
    /// Callers must treat the returned forest as immutable and re-read it
    /// after every mutation.
    pub fn roots(&self) -> &[Person] {
        &self.roots
    }

    /// Look up an entry anywhere in the forest
    pub fn find(&self, id: PersonId) -> Option<&Person> {
        ops::find(&self.roots, id)
    }

    /// The id the next insertion would be assigned
    pub fn next_id(&self) -> PersonId {
        ops::next_id(&self.roots)
    }

    /// Total number of entries
    pub fn person_count(&self) -> usize {
        ops::count(&self.roots)
    }

    /// Number of root-level entries
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Longest root-to-leaf chain
    pub fn depth(&self) -> usize {
        ops::depth(&self.roots)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    // === Mutations ===

    /// Flip the expand/collapse flag on an entry
    pub fn toggle_expanded(&mut self, id: PersonId) -> Result<()> {
        if self.find(id).is_none() {
            return Err(Error::NotFound(id));
        }
        self.roots = ops::toggle_expand(&self.roots, id);
        Ok(())
    }

    /// Rename an entry; the stored name is the trimmed input
    pub fn rename(&mut self, id: PersonId, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if self.find(id).is_none() {
            return Err(Error::NotFound(id));
        }
        self.roots = ops::rename(&self.roots, id, name);
        Ok(())
    }

    /// Append a child under `parent` and return the child's id
    ///
    /// The parent is expanded as a side effect so the new entry is
    /// immediately visible.
    pub fn add_child(&mut self, parent: PersonId, name: &str) -> Result<PersonId> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if self.find(parent).is_none() {
            return Err(Error::NotFound(parent));
        }
        let id = self.next_id();
        self.roots = ops::insert_child(&self.roots, parent, name);
        Ok(id)
    }

    /// Append a new root entry and return its id
    pub fn add_root(&mut self, name: &str) -> Result<PersonId> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        let id = self.next_id();
        self.roots = ops::insert_root(&self.roots, name);
        Ok(id)
    }

    /// Delete an entry and its whole subtree; returns how many entries
    /// were removed
    ///
    /// A root entry is protected while it is the only root, mirroring the
    /// interactive interface's delete policy. The engine itself would
    /// happily empty the forest; the guard lives here on purpose.
    pub fn delete(&mut self, id: PersonId) -> Result<usize> {
        let removed = self
            .find(id)
            .map(|person| person.subtree_ids().len())
            .ok_or(Error::NotFound(id))?;
        if self.roots.len() == 1 && self.roots[0].id == id {
            return Err(Error::LastRoot);
        }
        self.roots = ops::remove(&self.roots, id);
        Ok(removed)
    }

    // === Snapshot persistence (presentation-layer concern) ===

    /// Load a forest snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let roots: Vec<Person> = serde_json::from_str(&content)?;
        Ok(FamilyTree { roots })
    }

    /// Write the current snapshot as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.roots)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
