//! Read-only queries over a forest

use crate::model::{Person, PersonId};

/// Collect every id in the forest, pre-order
pub fn collect_ids(forest: &[Person]) -> Vec<PersonId> {
    walk(forest).map(|(_, person)| person.id).collect()
}

/// The next free id: one past the largest id anywhere in the forest
///
/// Allocation is global, never per-subtree, so a fresh id exceeds every
/// existing id even when the insert happens under a distant branch. Ids
/// are therefore monotonic and not contiguous after deletions. An empty
/// forest starts at 1.
pub fn next_id(forest: &[Person]) -> PersonId {
    collect_ids(forest)
        .into_iter()
        .max()
        .map(|id| id.next())
        .unwrap_or(PersonId(1))
}

/// Pre-order depth-first search across all roots; first match wins
pub fn find(forest: &[Person], id: PersonId) -> Option<&Person> {
    for person in forest {
        if person.id == id {
            return Some(person);
        }
        if let Some(found) = find(&person.children, id) {
            return Some(found);
        }
    }
    None
}

/// Iterate the forest in pre-order, yielding `(depth, person)` pairs
pub fn walk(forest: &[Person]) -> Walk<'_> {
    Walk::new(forest)
}

/// Explicit-stack pre-order iterator over a forest
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Person)>,
}

impl<'a> Walk<'a> {
    fn new(forest: &'a [Person]) -> Self {
        let stack = forest.iter().rev().map(|person| (0, person)).collect();
        Walk { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Person);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, person) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in person.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, person))
    }
}

/// Total number of entries in the forest
pub fn count(forest: &[Person]) -> usize {
    walk(forest).count()
}

/// Length of the longest root-to-leaf chain; 0 for an empty forest
pub fn depth(forest: &[Person]) -> usize {
    forest.iter().map(subtree_depth).max().unwrap_or(0)
}

fn subtree_depth(person: &Person) -> usize {
    1 + person.children.iter().map(subtree_depth).max().unwrap_or(0)
}
