//! stemma CLI - command line interface for the family tree engine
//!
//! Each invocation loads the forest snapshot from disk, applies one
//! operation through the session, and writes the result back. Output is
//! JSON by default so the binary is easy to wrap from other tooling.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stemma::{render, FamilyTree, PersonId};

#[derive(Parser)]
#[command(name = "stemma")]
#[command(about = "An editable family tree engine")]
#[command(version)]
struct Cli {
    /// Path to the tree snapshot file
    #[arg(short, long, default_value = "family.json")]
    tree: PathBuf,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new tree file
    Init {
        /// Seed with the demo family instead of an empty tree
        #[arg(long)]
        sample: bool,
    },

    /// Print the tree as an outline (text) or the raw forest (json)
    Show {
        /// Include children of collapsed entries
        #[arg(short, long)]
        all: bool,
    },

    /// List every entry in pre-order
    List,

    /// Get a single entry by id
    Get {
        /// The entry id
        id: u64,
    },

    /// Add a new root entry
    AddRoot {
        /// Name for the new entry
        #[arg(default_value = "New Person")]
        name: String,
    },

    /// Add a child under an existing entry
    AddChild {
        /// Parent entry id
        parent: u64,
        /// Name for the new entry
        name: String,
    },

    /// Rename an entry
    Rename {
        /// The entry id
        id: u64,
        /// The new name
        name: String,
    },

    /// Toggle an entry's expand/collapse flag
    Toggle {
        /// The entry id
        id: u64,
    },

    /// Delete an entry and its whole subtree
    Delete {
        /// The entry id
        id: u64,
    },

    /// Show tree statistics
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { sample } => {
            let tree = if sample {
                FamilyTree::sample()
            } else {
                FamilyTree::new()
            };
            tree.save(&cli.tree)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "message": format!("Created tree at {}", cli.tree.display()),
                    "people": tree.person_count()
                }),
            );
        }

        Commands::Show { all } => {
            let tree = open_tree(&cli.tree)?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(tree.roots())?);
                }
                OutputFormat::Text => {
                    print!("{}", render::outline(tree.roots(), all));
                }
            }
        }

        Commands::List => {
            let tree = open_tree(&cli.tree)?;
            let items: Vec<_> = stemma::ops::walk(tree.roots())
                .map(|(depth, person)| {
                    serde_json::json!({
                        "id": person.id.value(),
                        "name": person.name,
                        "depth": depth,
                        "expanded": person.expanded,
                        "children": person.children.len()
                    })
                })
                .collect();
            output(
                &cli.format,
                &serde_json::json!({
                    "count": items.len(),
                    "people": items
                }),
            );
        }

        Commands::Get { id } => {
            let tree = open_tree(&cli.tree)?;
            match tree.find(PersonId::new(id)) {
                Some(person) => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "id": person.id.value(),
                            "name": person.name,
                            "expanded": person.expanded,
                            "children": person.children.len(),
                            "descendants": person.descendant_count()
                        }),
                    );
                }
                None => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "status": "error",
                            "message": format!("Person not found: {}", id)
                        }),
                    );
                    std::process::exit(1);
                }
            }
        }

        Commands::AddRoot { name } => {
            let mut tree = open_tree(&cli.tree)?;
            let id = tree.add_root(&name)?;
            tree.save(&cli.tree)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "id": id.value(),
                    "name": name.trim()
                }),
            );
        }

        Commands::AddChild { parent, name } => {
            let mut tree = open_tree(&cli.tree)?;
            let id = tree.add_child(PersonId::new(parent), &name)?;
            tree.save(&cli.tree)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "id": id.value(),
                    "parent": parent,
                    "name": name.trim()
                }),
            );
        }

        Commands::Rename { id, name } => {
            let mut tree = open_tree(&cli.tree)?;
            tree.rename(PersonId::new(id), &name)?;
            tree.save(&cli.tree)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "id": id,
                    "name": name.trim()
                }),
            );
        }

        Commands::Toggle { id } => {
            let mut tree = open_tree(&cli.tree)?;
            let person_id = PersonId::new(id);
            tree.toggle_expanded(person_id)?;
            tree.save(&cli.tree)?;
            let expanded = tree.find(person_id).map(|p| p.expanded).unwrap_or(false);
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "id": id,
                    "expanded": expanded
                }),
            );
        }

        Commands::Delete { id } => {
            let mut tree = open_tree(&cli.tree)?;
            let removed = tree.delete(PersonId::new(id))?;
            tree.save(&cli.tree)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "id": id,
                    "removed": removed
                }),
            );
        }

        Commands::Status => {
            let tree = open_tree(&cli.tree)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "tree": cli.tree.display().to_string(),
                    "people": tree.person_count(),
                    "roots": tree.root_count(),
                    "depth": tree.depth(),
                    "next_id": tree.next_id().value()
                }),
            );
        }
    }

    Ok(())
}

fn open_tree(path: &PathBuf) -> anyhow::Result<FamilyTree> {
    if path.exists() {
        Ok(FamilyTree::load(path)?)
    } else {
        Ok(FamilyTree::new())
    }
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
