//! Store-level graph commands: init, create, list, show, delete

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use tangle_core::error::{Result, TangleError};
use tangle_core::graph::{Graph, GraphMode};
use tangle_core::persist;
use tangle_core::store::Store;

/// `tangle init`
pub fn init(cli: &Cli, root: &Path) -> Result<()> {
    let store = Store::init(root)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "root": store.root().display().to_string() })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("initialized store at {}", store.root().display());
            }
        }
    }
    Ok(())
}

/// `tangle create <name>`
pub fn create(cli: &Cli, root: &Path, name: &str, directed: bool, undirected: bool) -> Result<()> {
    let store = Store::open(root)?;
    if store.exists(name) {
        return Err(TangleError::GraphExists {
            name: name.to_string(),
        });
    }

    let mode = if directed {
        GraphMode::Directed
    } else if undirected {
        GraphMode::Undirected
    } else if store.config().default_directed {
        GraphMode::Directed
    } else {
        GraphMode::Undirected
    };

    let graph = Graph::new(mode);
    store.save(name, &graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "name": name, "directed": graph.is_directed() })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let kind = if graph.is_directed() {
                    "directed"
                } else {
                    "undirected"
                };
                println!("created {kind} graph {name}");
            }
        }
    }
    Ok(())
}

/// `tangle list`
pub fn list(cli: &Cli, root: &Path) -> Result<()> {
    let store = Store::open(root)?;
    let names = store.list()?;

    match cli.format {
        OutputFormat::Json => {
            let mut entries = Vec::new();
            for name in &names {
                let document = store.load_document(name)?;
                entries.push(serde_json::json!({
                    "name": name,
                    "directed": document.directed,
                    "nodes": document.nodes.len(),
                    "edges": document.edges.len(),
                    "saved": document.saved,
                }));
            }
            println!("{}", serde_json::json!({ "graphs": entries }));
        }
        OutputFormat::Human => {
            for name in &names {
                let document = store.load_document(name)?;
                let kind = if document.directed {
                    "directed"
                } else {
                    "undirected"
                };
                println!(
                    "{name}\t{kind}\t{} nodes\t{} edges\t{}",
                    document.nodes.len(),
                    document.edges.len(),
                    document.saved.format("%Y-%m-%d %H:%M"),
                );
            }
            if names.is_empty() && !cli.quiet {
                eprintln!("no graphs saved yet");
            }
        }
    }
    Ok(())
}

/// `tangle show <name>`
pub fn show(cli: &Cli, root: &Path, name: &str) -> Result<()> {
    let store = Store::open(root)?;
    let graph = store.load(name)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "name": name,
                    "directed": graph.is_directed(),
                    "nodes": persist::node_records(&graph),
                    "edges": persist::edge_records(&graph),
                })
            );
        }
        OutputFormat::Human => {
            print!("{graph}");
        }
    }
    Ok(())
}

/// `tangle delete <name>`
pub fn delete(cli: &Cli, root: &Path, name: &str) -> Result<()> {
    let store = Store::open(root)?;
    store.delete(name)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": name }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("deleted graph {name}");
            }
        }
    }
    Ok(())
}
