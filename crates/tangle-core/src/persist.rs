//! Structural JSON persistence for graphs
//!
//! A graph is dumped as its directedness flag plus ordered node and edge
//! records. Adjacency lists are never serialized; loading replays the edge
//! list through [`Graph::add_edge`] so adjacency is rederived from scratch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TangleError};
use crate::graph::{Graph, GraphMode, Node};

/// Current graph document format version
pub const FORMAT_VERSION: u32 = 1;

/// Persisted node: identifier and payload only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// Persisted edge: identifier and endpoint pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: u32,
    pub a: u32,
    pub b: u32,
}

/// A complete saved graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Document format version
    pub version: u32,
    /// When the document was written
    pub saved: DateTime<Utc>,
    /// Directedness flag
    pub directed: bool,
    /// Nodes in insertion order
    pub nodes: Vec<NodeRecord>,
    /// Edges in insertion order
    pub edges: Vec<EdgeRecord>,
}

/// Node records for a graph, in insertion order
pub fn node_records(graph: &Graph) -> Vec<NodeRecord> {
    graph
        .nodes()
        .iter()
        .map(|node| NodeRecord {
            id: node.id,
            content: node.content.clone(),
        })
        .collect()
}

/// Edge records for a graph, in insertion order
pub fn edge_records(graph: &Graph) -> Vec<EdgeRecord> {
    graph
        .edges()
        .iter()
        .map(|edge| EdgeRecord {
            id: edge.id,
            a: edge.a,
            b: edge.b,
        })
        .collect()
}

impl GraphDocument {
    /// Dump a graph's structure, stamped with the current time
    pub fn from_graph(graph: &Graph) -> Self {
        GraphDocument {
            version: FORMAT_VERSION,
            saved: Utc::now(),
            directed: graph.is_directed(),
            nodes: node_records(graph),
            edges: edge_records(graph),
        }
    }

    /// Reconstruct the graph by replaying node and edge insertions in order.
    ///
    /// An edge record naming a missing endpoint is a data error — the
    /// document does not describe a well-formed graph.
    pub fn into_graph(self) -> Result<Graph> {
        if self.version != FORMAT_VERSION {
            return Err(TangleError::InvalidGraph {
                reason: format!(
                    "unsupported document version {} (supported: {})",
                    self.version, FORMAT_VERSION
                ),
            });
        }

        let mode = if self.directed {
            GraphMode::Directed
        } else {
            GraphMode::Undirected
        };
        let mut graph = Graph::new(mode);

        for record in self.nodes {
            graph.add_node(Node::with_content(record.id, record.content));
        }
        for record in self.edges {
            if !graph.add_edge(record.a, record.b, record.id) {
                return Err(TangleError::InvalidGraph {
                    reason: format!(
                        "edge {} references missing node {} or {}",
                        record.id, record.a, record.b
                    ),
                });
            }
        }

        Ok(graph)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from a JSON string
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Graph {
        let mut graph = Graph::undirected();
        graph.add_node(Node::with_content(1, Some(json!("uno"))));
        graph.add_node(Node::new(2));
        graph.add_node(Node::with_content(3, Some(json!(42))));
        assert!(graph.add_edge(1, 2, 0));
        assert!(graph.add_edge(2, 3, 0));
        graph
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let graph = sample();
        let raw = GraphDocument::from_graph(&graph).to_json().unwrap();
        let restored = GraphDocument::from_json(&raw).unwrap().into_graph().unwrap();

        assert_eq!(restored.is_directed(), graph.is_directed());
        assert_eq!(restored.nodes().len(), graph.nodes().len());
        assert_eq!(restored.edges().len(), graph.edges().len());
        for (original, loaded) in graph.nodes().iter().zip(restored.nodes()) {
            assert_eq!(original.id, loaded.id);
            assert_eq!(original.content, loaded.content);
        }
        for (original, loaded) in graph.edges().iter().zip(restored.edges()) {
            assert_eq!(original.id, loaded.id);
            assert_eq!(original.a, loaded.a);
            assert_eq!(original.b, loaded.b);
        }
    }

    #[test]
    fn test_round_trip_rederives_adjacency() {
        let graph = sample();
        let restored = GraphDocument::from_graph(&graph)
            .into_graph()
            .unwrap();

        for (original, loaded) in graph.nodes().iter().zip(restored.nodes()) {
            assert_eq!(original.neighbors(), loaded.neighbors());
        }
    }

    #[test]
    fn test_round_trip_directed() {
        let mut graph = Graph::directed();
        graph.add_node(Node::new(1));
        graph.add_node(Node::new(2));
        assert!(graph.add_edge(1, 2, 5));

        let restored = GraphDocument::from_graph(&graph).into_graph().unwrap();
        assert!(restored.is_directed());
        assert_eq!(restored.get_node(1).unwrap().neighbors(), &[2]);
        assert!(restored.get_node(2).unwrap().neighbors().is_empty());
    }

    #[test]
    fn test_dangling_edge_is_invalid() {
        let mut document = GraphDocument::from_graph(&sample());
        document.edges.push(EdgeRecord { id: 9, a: 1, b: 99 });

        let err = document.into_graph().unwrap_err();
        assert!(matches!(err, TangleError::InvalidGraph { .. }));
    }

    #[test]
    fn test_unsupported_version_is_invalid() {
        let mut document = GraphDocument::from_graph(&sample());
        document.version = FORMAT_VERSION + 1;
        assert!(matches!(
            document.into_graph(),
            Err(TangleError::InvalidGraph { .. })
        ));
    }

    #[test]
    fn test_absent_content_is_omitted_from_json() {
        let raw = GraphDocument::from_graph(&sample()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["nodes"][0]["content"], json!("uno"));
        assert!(value["nodes"][1].get("content").is_none());
    }
}
