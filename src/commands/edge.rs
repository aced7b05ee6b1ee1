//! `tangle edge` subcommands

use std::path::Path;

use crate::cli::{Cli, EdgeCommands, OutputFormat};
use tangle_core::error::{Result, TangleError};
use tangle_core::store::Store;

pub fn run(cli: &Cli, root: &Path, command: &EdgeCommands) -> Result<()> {
    let store = Store::open(root)?;
    match command {
        EdgeCommands::Add { graph, a, b, id } => add(cli, &store, graph, *a, *b, *id),
        EdgeCommands::Rm { graph, a, b, id } => rm(cli, &store, graph, *a, *b, *id),
    }
}

fn add(cli: &Cli, store: &Store, name: &str, a: u32, b: u32, id: u32) -> Result<()> {
    let mut graph = store.load(name)?;

    if !graph.add_edge(a, b, id) {
        return Err(TangleError::InvalidOperation {
            reason: format!("cannot add edge ({a},{b}): both endpoints must exist"),
        });
    }
    // the freshly appended edge carries the id actually assigned
    let assigned = graph.edges().last().map(|edge| edge.id).unwrap_or(id);
    store.save(name, &graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "graph": name,
                    "edge": { "id": assigned, "a": a, "b": b },
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("added edge {assigned}: ({a},{b})");
            }
        }
    }
    Ok(())
}

fn rm(
    cli: &Cli,
    store: &Store,
    name: &str,
    a: Option<u32>,
    b: Option<u32>,
    id: Option<u32>,
) -> Result<()> {
    let mut graph = store.load(name)?;

    let (removed, descriptor) = match (id, a, b) {
        (Some(id), None, None) => (graph.remove_edge(id), id.to_string()),
        (None, Some(a), Some(b)) => (graph.remove_edge_between(a, b), format!("({a},{b})")),
        _ => {
            return Err(TangleError::UsageError(
                "specify either --id or both endpoint ids".to_string(),
            ))
        }
    };

    if !removed {
        return Err(TangleError::NotFound {
            context: "edge".to_string(),
            value: descriptor,
        });
    }
    store.save(name, &graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "graph": name, "removed": descriptor }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("removed edge {descriptor}");
            }
        }
    }
    Ok(())
}
