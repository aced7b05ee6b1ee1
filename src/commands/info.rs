//! `tangle info` - inspect a single node

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use tangle_core::error::{Result, TangleError};
use tangle_core::store::Store;

pub fn run(cli: &Cli, root: &Path, name: &str, id: u32) -> Result<()> {
    let store = Store::open(root)?;
    let graph = store.load(name)?;

    let Some(node) = graph.get_node(id) else {
        return Err(TangleError::NodeNotFound { id });
    };

    match cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "graph": name,
                "id": node.id,
                "content": node.content,
                "neighbors": node.neighbors(),
            });
            if graph.is_directed() {
                value["parents"] = serde_json::json!(graph.parents(id));
                value["children"] = serde_json::json!(graph.children(id));
                value["in_degree"] = serde_json::json!(graph.in_degree(id));
                value["out_degree"] = serde_json::json!(graph.out_degree(id));
            }
            println!("{value}");
        }
        OutputFormat::Human => {
            println!("{node}");
            println!("neighbors: {:?}", node.neighbors());
            if graph.is_directed() {
                println!("parents: {:?}", graph.parents(id));
                println!("children: {:?}", graph.children(id));
                println!(
                    "in-degree: {}, out-degree: {}",
                    graph.in_degree(id),
                    graph.out_degree(id)
                );
            }
        }
    }
    Ok(())
}
