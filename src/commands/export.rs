//! `tangle export` - CSV node/edge tables for a graph

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use tangle_core::error::Result;
use tangle_core::store::Store;

pub fn run(cli: &Cli, root: &Path, name: &str) -> Result<()> {
    let store = Store::open(root)?;
    let graph = store.load(name)?;
    let dir = store.export(name, &graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "graph": name,
                    "path": dir.display().to_string(),
                    "nodes": graph.nodes().len(),
                    "edges": graph.edges().len(),
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("exported {name} to {}", dir.display());
            }
        }
    }
    Ok(())
}
