//! Pure forest transformations
//!
//! Every function takes a forest by reference and returns a brand new
//! forest value. Inputs are never mutated, so snapshots handed out
//! earlier stay valid after any number of edits. Lookups that miss
//! degrade to no-ops: the result is deeply equal to the input.

use super::{find, next_id};
use crate::model::{Person, PersonId};

/// Invert the `expanded` flag on the matching entry
///
/// Everything else is structurally unchanged; the flag is per-entry and
/// never inherited.
pub fn toggle_expand(forest: &[Person], id: PersonId) -> Vec<Person> {
    forest
        .iter()
        .map(|person| {
            if person.id == id {
                Person {
                    expanded: !person.expanded,
                    ..person.clone()
                }
            } else if person.is_leaf() {
                person.clone()
            } else {
                Person {
                    children: toggle_expand(&person.children, id),
                    ..person.clone()
                }
            }
        })
        .collect()
}

/// Replace the matching entry's name with the trimmed input
///
/// A name that is blank after trimming leaves the forest unchanged; the
/// session layer reports that case as an error before calling in here.
pub fn rename(forest: &[Person], id: PersonId, name: &str) -> Vec<Person> {
    let name = name.trim();
    if name.is_empty() {
        return forest.to_vec();
    }
    set_name(forest, id, name)
}

fn set_name(forest: &[Person], id: PersonId, name: &str) -> Vec<Person> {
    forest
        .iter()
        .map(|person| {
            if person.id == id {
                Person {
                    name: name.to_string(),
                    ..person.clone()
                }
            } else if person.is_leaf() {
                person.clone()
            } else {
                Person {
                    children: set_name(&person.children, id, name),
                    ..person.clone()
                }
            }
        })
        .collect()
}

/// Append a new child under `parent` and expand it so the child is visible
///
/// The child's id is allocated over the entire forest, not the parent's
/// subtree. A blank name or unknown parent is a no-op and consumes no id.
pub fn insert_child(forest: &[Person], parent: PersonId, name: &str) -> Vec<Person> {
    let name = name.trim();
    if name.is_empty() || find(forest, parent).is_none() {
        return forest.to_vec();
    }
    let child = Person::new(next_id(forest), name);
    attach(forest, parent, &child)
}

fn attach(forest: &[Person], parent: PersonId, child: &Person) -> Vec<Person> {
    forest
        .iter()
        .map(|person| {
            if person.id == parent {
                let mut children = person.children.clone();
                children.push(child.clone());
                Person {
                    expanded: true,
                    children,
                    ..person.clone()
                }
            } else if person.is_leaf() {
                person.clone()
            } else {
                Person {
                    children: attach(&person.children, parent, child),
                    ..person.clone()
                }
            }
        })
        .collect()
}

/// Append a new collapsed root entry
///
/// No existing entry is touched. A blank name is a no-op, keeping the
/// non-empty-name rule unconditional across the model.
pub fn insert_root(forest: &[Person], name: &str) -> Vec<Person> {
    let name = name.trim();
    if name.is_empty() {
        return forest.to_vec();
    }
    let mut roots = forest.to_vec();
    roots.push(Person::new(next_id(forest), name));
    roots
}

/// Drop the matching entry together with its entire subtree
///
/// All other entries keep their relative order. Ids are never renumbered,
/// so a removed id stays retired forever.
pub fn remove(forest: &[Person], id: PersonId) -> Vec<Person> {
    forest
        .iter()
        .filter(|person| person.id != id)
        .map(|person| {
            if person.is_leaf() {
                person.clone()
            } else {
                Person {
                    children: remove(&person.children, id),
                    ..person.clone()
                }
            }
        })
        .collect()
}
