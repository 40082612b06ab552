//! # stemma
//!
//! An editable family tree: an in-memory forest of named entries with
//! expand/collapse state, edited through pure operations that return new
//! forest values instead of mutating in place.
//!
//! ## Core Concepts
//!
//! - **Person**: one entry, with a stable engine-assigned id, a display
//!   name, an expand/collapse flag, and ordered children
//! - **Forest**: the ordered list of root entries; the whole structure is
//!   a plain value, so snapshots stay valid across edits
//! - **Ops**: pure transformations (toggle, rename, insert, remove) over
//!   a forest; unknown targets degrade to no-ops
//! - **FamilyTree**: the single-writer session that owns the canonical
//!   snapshot and validates edits before applying them
//!
//! ## Example
//!
//! ```
//! use stemma::FamilyTree;
//!
//! let mut tree = FamilyTree::new();
//! let root = tree.add_root("Ada Lovelace").unwrap();
//! let child = tree.add_child(root, "Byron").unwrap();
//!
//! // Adding a child expands the parent so the child is visible
//! assert!(tree.find(root).unwrap().expanded);
//! assert_eq!(tree.find(child).unwrap().name, "Byron");
//! ```

pub mod model;
pub mod ops;
pub mod render;

mod error;
mod session;

pub use error::{Error, Result};
pub use model::{Person, PersonId};
pub use session::FamilyTree;
