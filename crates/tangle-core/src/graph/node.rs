//! Graph vertices

use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::Value;

/// A vertex in a [`Graph`](crate::graph::Graph).
///
/// Carries an integer identifier, an optional opaque payload, and an
/// adjacency list of neighbor identifiers. Neighbor entries name nodes owned
/// by the same graph; a node never owns its neighbors.
///
/// Equality and hashing are defined solely by `id`: two nodes with the same
/// identifier but different content compare equal for membership purposes.
/// Traversal and removal logic depends on this.
#[derive(Debug, Clone)]
pub struct Node {
    /// Identifier, unique within the owning graph
    pub id: u32,
    /// Opaque application payload
    pub content: Option<Value>,
    neighbors: Vec<u32>,
}

impl Node {
    /// Create a node with no payload
    pub fn new(id: u32) -> Self {
        Node {
            id,
            content: None,
            neighbors: Vec::new(),
        }
    }

    /// Create a node with an optional payload
    pub fn with_content(id: u32, content: Option<Value>) -> Self {
        Node {
            id,
            content,
            neighbors: Vec::new(),
        }
    }

    /// Neighbor identifiers in insertion order
    pub fn neighbors(&self) -> &[u32] {
        &self.neighbors
    }

    /// Append a neighbor id. No dedup check here; edge uniqueness is the
    /// owning graph's responsibility.
    pub fn add_neighbor(&mut self, id: u32) {
        self.neighbors.push(id);
    }

    /// Remove the first neighbor entry matching `id`. Returns whether a
    /// removal occurred; an absent neighbor is not an error.
    pub fn remove_neighbor(&mut self, id: u32) -> bool {
        match self.neighbors.iter().position(|&neighbor| neighbor == id) {
            Some(position) => {
                self.neighbors.remove(position);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Some(content) => write!(f, "Node({}, {})", self.id, content),
            None => write!(f, "Node({})", self.id),
        }
    }
}
