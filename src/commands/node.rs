//! `tangle node` subcommands

use std::path::Path;

use serde_json::Value;

use crate::cli::{Cli, NodeCommands, OutputFormat};
use tangle_core::error::{Result, TangleError};
use tangle_core::graph::Node;
use tangle_core::store::Store;

pub fn run(cli: &Cli, root: &Path, command: &NodeCommands) -> Result<()> {
    let store = Store::open(root)?;
    match command {
        NodeCommands::Add { graph, id, content } => add(cli, &store, graph, *id, content.as_deref()),
        NodeCommands::Rm { graph, id } => rm(cli, &store, graph, *id),
    }
}

fn add(cli: &Cli, store: &Store, name: &str, id: u32, content: Option<&str>) -> Result<()> {
    let mut graph = store.load(name)?;

    let payload = content.map(|text| Value::String(text.to_string()));
    let assigned = graph.add_node(Node::with_content(id, payload.clone()));
    store.save(name, &graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "graph": name, "node": { "id": assigned, "content": payload } })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("added node {assigned}");
            }
        }
    }
    Ok(())
}

fn rm(cli: &Cli, store: &Store, name: &str, id: u32) -> Result<()> {
    let mut graph = store.load(name)?;

    if !graph.remove_node(id) {
        return Err(TangleError::NodeNotFound { id });
    }
    store.save(name, &graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "graph": name, "removed": id }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("removed node {id}");
            }
        }
    }
    Ok(())
}
