//! Tabular CSV export
//!
//! Two independent tables per graph: a node table with columns (Id, Label)
//! and an edge table with columns (Source, Target, Type, Id), where Type
//! names the graph's directedness. Rows follow insertion order.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::graph::Graph;

/// Node table file name
pub const NODES_FILE: &str = "nodes.csv";
/// Edge table file name
pub const EDGES_FILE: &str = "edges.csv";

/// Write `nodes.csv` and `edges.csv` for the graph into `dir`, creating the
/// directory if needed
pub fn write_csv_tables(graph: &Graph, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    let mut nodes = csv::Writer::from_path(dir.join(NODES_FILE))?;
    nodes.write_record(["Id", "Label"])?;
    for node in graph.nodes() {
        nodes.write_record([node.id.to_string(), label(node.content.as_ref())])?;
    }
    nodes.flush()?;

    let kind = if graph.is_directed() {
        "Directed"
    } else {
        "Undirected"
    };
    let mut edges = csv::Writer::from_path(dir.join(EDGES_FILE))?;
    edges.write_record(["Source", "Target", "Type", "Id"])?;
    for edge in graph.edges() {
        edges.write_record([
            edge.a.to_string(),
            edge.b.to_string(),
            kind.to_string(),
            edge.id.to_string(),
        ])?;
    }
    edges.flush()?;

    Ok(())
}

/// Label cell for a node payload; JSON strings are emitted unquoted
fn label(content: Option<&Value>) -> String {
    match content {
        None => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, Node};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_tables_have_exact_headers_and_rows() {
        let mut graph = Graph::undirected();
        graph.add_node(Node::with_content(1, Some(json!("first"))));
        graph.add_node(Node::new(2));
        assert!(graph.add_edge(1, 2, 0));

        let dir = tempdir().unwrap();
        write_csv_tables(&graph, dir.path()).unwrap();

        let nodes = fs::read_to_string(dir.path().join(NODES_FILE)).unwrap();
        assert_eq!(nodes, "Id,Label\n1,first\n2,\n");

        let edges = fs::read_to_string(dir.path().join(EDGES_FILE)).unwrap();
        assert_eq!(edges, "Source,Target,Type,Id\n1,2,Undirected,0\n");
    }

    #[test]
    fn test_directed_type_column() {
        let mut graph = Graph::directed();
        graph.add_node(Node::new(1));
        graph.add_node(Node::new(2));
        assert!(graph.add_edge(1, 2, 3));

        let dir = tempdir().unwrap();
        write_csv_tables(&graph, dir.path()).unwrap();

        let edges = fs::read_to_string(dir.path().join(EDGES_FILE)).unwrap();
        assert_eq!(edges, "Source,Target,Type,Id\n1,2,Directed,3\n");
    }

    #[test]
    fn test_non_string_payload_is_rendered_as_json() {
        let mut graph = Graph::undirected();
        graph.add_node(Node::with_content(1, Some(json!({"k": 1}))));

        let dir = tempdir().unwrap();
        write_csv_tables(&graph, dir.path()).unwrap();

        let nodes = fs::read_to_string(dir.path().join(NODES_FILE)).unwrap();
        assert_eq!(nodes, "Id,Label\n1,\"{\"\"k\"\":1}\"\n");
    }
}
