//! `tangle bfs` / `tangle dfs` - traversal engine commands

use std::path::Path;

use crate::cli::{Cli, OutputFormat, TraverseCommands};
use tangle_core::error::{Result, TangleError};
use tangle_core::graph::{bfs, dfs, Graph};
use tangle_core::persist;
use tangle_core::store::Store;

/// Which traversal engine a command runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Bfs,
    Dfs,
}

impl Engine {
    pub fn name(self) -> &'static str {
        match self {
            Engine::Bfs => "bfs",
            Engine::Dfs => "dfs",
        }
    }

    pub fn order(self, graph: &Graph, start: u32) -> Vec<u32> {
        match self {
            Engine::Bfs => bfs::traversal_order(graph, start),
            Engine::Dfs => dfs::traversal_order(graph, start),
        }
    }

    pub fn path(self, graph: &Graph, from: u32, to: u32) -> Option<Vec<u32>> {
        match self {
            // BFS paths are shortest by hop count; DFS returns any one path
            Engine::Bfs => bfs::shortest_path(graph, from, to),
            Engine::Dfs => dfs::find_path(graph, from, to),
        }
    }

    pub fn tree(self, graph: &Graph, root: u32) -> Option<Graph> {
        match self {
            Engine::Bfs => bfs::spanning_tree(graph, root),
            Engine::Dfs => dfs::spanning_tree(graph, root),
        }
    }
}

pub fn run(cli: &Cli, root: &Path, engine: Engine, command: &TraverseCommands) -> Result<()> {
    let store = Store::open(root)?;
    match command {
        TraverseCommands::Order { graph, start } => order(cli, &store, engine, graph, *start),
        TraverseCommands::Path { graph, from, to } => path(cli, &store, engine, graph, *from, *to),
        TraverseCommands::Tree {
            graph,
            root_id,
            save,
        } => tree(cli, &store, engine, graph, *root_id, save.as_deref()),
    }
}

fn order(cli: &Cli, store: &Store, engine: Engine, name: &str, start: u32) -> Result<()> {
    let graph = store.load(name)?;
    let order = engine.order(&graph, start);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "graph": name,
                    "algorithm": engine.name(),
                    "start": start,
                    "order": order,
                })
            );
        }
        OutputFormat::Human => {
            if order.is_empty() {
                if !cli.quiet {
                    eprintln!("start node {start} not in graph");
                }
            } else {
                println!("{}", join_ids(&order, " "));
            }
        }
    }
    Ok(())
}

fn path(cli: &Cli, store: &Store, engine: Engine, name: &str, from: u32, to: u32) -> Result<()> {
    let graph = store.load(name)?;
    let path = engine.path(&graph, from, to);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "graph": name,
                    "algorithm": engine.name(),
                    "from": from,
                    "to": to,
                    "found": path.is_some(),
                    "path": path,
                })
            );
        }
        OutputFormat::Human => match path {
            Some(path) => println!("{}", join_ids(&path, " -> ")),
            None => println!("no path from {from} to {to}"),
        },
    }
    Ok(())
}

fn tree(
    cli: &Cli,
    store: &Store,
    engine: Engine,
    name: &str,
    root: u32,
    save: Option<&str>,
) -> Result<()> {
    let graph = store.load(name)?;
    let tree = engine.tree(&graph, root);

    let Some(tree) = tree else {
        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "graph": name,
                        "algorithm": engine.name(),
                        "root": root,
                        "found": false,
                    })
                );
            }
            OutputFormat::Human => println!("root node {root} not in graph"),
        }
        return Ok(());
    };

    let saved = match save {
        Some(tree_name) => {
            if store.exists(tree_name) {
                return Err(TangleError::GraphExists {
                    name: tree_name.to_string(),
                });
            }
            store.save(tree_name, &tree)?;
            Some(tree_name)
        }
        None => None,
    };

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "graph": name,
                    "algorithm": engine.name(),
                    "root": root,
                    "found": true,
                    "directed": tree.is_directed(),
                    "nodes": persist::node_records(&tree),
                    "edges": persist::edge_records(&tree),
                    "saved": saved,
                })
            );
        }
        OutputFormat::Human => {
            print!("{tree}");
            if let Some(tree_name) = saved {
                if !cli.quiet {
                    println!("saved tree as {tree_name}");
                }
            }
        }
    }
    Ok(())
}

fn join_ids(ids: &[u32], separator: &str) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
