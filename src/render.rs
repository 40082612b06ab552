//! Text rendering of a forest
//!
//! The CLI analog of the interactive renderer: an indented outline where
//! a collapsed entry's children are elided behind a count marker.

use termtree::Tree;

use crate::model::Person;

/// Render the forest as a text outline
///
/// Children of collapsed entries are hidden and summarized by a `(+n)`
/// suffix on the parent's label. With `show_all`, collapse flags are
/// ignored and the full forest is printed.
pub fn outline(forest: &[Person], show_all: bool) -> String {
    let mut out = String::new();
    for person in forest {
        let block = to_display_tree(person, show_all).to_string();
        out.push_str(block.trim_end_matches('\n'));
        out.push('\n');
    }
    out
}

fn to_display_tree(person: &Person, show_all: bool) -> Tree<String> {
    if person.is_leaf() {
        return Tree::new(label(person, false));
    }
    if !show_all && !person.expanded {
        return Tree::new(label(person, true));
    }
    let leaves: Vec<_> = person
        .children
        .iter()
        .map(|child| to_display_tree(child, show_all))
        .collect();
    Tree::new(label(person, false)).with_leaves(leaves)
}

fn label(person: &Person, elided: bool) -> String {
    if elided {
        format!(
            "{} [{}] (+{})",
            person.name,
            person.id,
            person.descendant_count()
        )
    } else {
        format!("{} [{}]", person.name, person.id)
    }
}
