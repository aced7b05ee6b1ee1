//! Depth-first search over a graph
//!
//! Recursive exploration in adjacency-list order: pre-order visit listing,
//! backtracking path search, and derived spanning trees. Like the BFS
//! engine, every operation checks that the start node exists before
//! recursing and reports absence instead of erroring.

use std::collections::HashSet;

use crate::graph::bfs::copy_node;
use crate::graph::Graph;

/// Depth-first pre-order visit order from `start`.
///
/// Returns an empty vec when `start` is not in the graph.
#[tracing::instrument(skip(graph))]
pub fn traversal_order(graph: &Graph, start: u32) -> Vec<u32> {
    let mut order = Vec::new();
    if !graph.nodes_exist(&[start]) {
        return order;
    }
    let mut visited: HashSet<u32> = HashSet::new();
    visit(graph, start, &mut order, &mut visited);
    order
}

fn visit(graph: &Graph, id: u32, order: &mut Vec<u32>, visited: &mut HashSet<u32>) {
    order.push(id);
    visited.insert(id);
    let Some(node) = graph.get_node(id) else {
        return;
    };
    for &neighbor in node.neighbors() {
        if !visited.contains(&neighbor) {
            visit(graph, neighbor, order, visited);
        }
    }
}

/// One path from `start` to `goal` found depth-first — not necessarily the
/// shortest.
///
/// The candidate path grows as the recursion descends; a node is popped back
/// off iff, after all its neighbors are exhausted, the path still does not
/// end at the goal. `start == goal` yields the single-element path. Returns
/// `None` when `start` is missing or no path exists.
#[tracing::instrument(skip(graph))]
pub fn find_path(graph: &Graph, start: u32, goal: u32) -> Option<Vec<u32>> {
    if !graph.nodes_exist(&[start]) {
        return None;
    }
    let mut path = Vec::new();
    let mut visited: HashSet<u32> = HashSet::new();
    search(graph, start, goal, &mut path, &mut visited);
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

fn search(graph: &Graph, id: u32, goal: u32, path: &mut Vec<u32>, visited: &mut HashSet<u32>) {
    path.push(id);
    visited.insert(id);

    if let Some(node) = graph.get_node(id) {
        for &neighbor in node.neighbors() {
            if !visited.contains(&neighbor) {
                search(graph, neighbor, goal, path, visited);
                if path.last() == Some(&goal) {
                    // the goal was found downstream; stop exploring siblings
                    break;
                }
            }
        }
    }

    if path.last() != Some(&goal) {
        // no branch below this node reaches the goal
        path.pop();
    }
}

/// Spanning tree of first-visit parent relations rooted at `root`, built by
/// depth-first descent.
///
/// Same copy semantics as the BFS variant: a fresh graph of the same
/// directedness, nodes copied with identifier and content only. Returns
/// `None` when `root` is not in the graph.
#[tracing::instrument(skip(graph))]
pub fn spanning_tree(graph: &Graph, root: u32) -> Option<Graph> {
    if !graph.nodes_exist(&[root]) {
        return None;
    }
    let mut tree = Graph::new(graph.mode());
    let mut visited: HashSet<u32> = HashSet::from([root]);
    grow(graph, root, &mut tree, &mut visited);
    Some(tree)
}

fn grow(graph: &Graph, id: u32, tree: &mut Graph, visited: &mut HashSet<u32>) {
    copy_node(graph, tree, id);
    let Some(node) = graph.get_node(id) else {
        return;
    };
    for &neighbor in node.neighbors() {
        if visited.insert(neighbor) {
            copy_node(graph, tree, neighbor);
            tree.add_edge(id, neighbor, 0);
            grow(graph, neighbor, tree, visited);
        }
    }
}

#[cfg(test)]
mod tests;
