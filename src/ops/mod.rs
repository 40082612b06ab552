//! Pure operations over a forest of people
//!
//! All mutation here is by value: an operation reads a forest slice and
//! returns a new `Vec<Person>`, leaving the input untouched.

mod mutate;
mod query;

pub use mutate::{insert_child, insert_root, remove, rename, toggle_expand};
pub use query::{collect_ids, count, depth, find, next_id, walk, Walk};
