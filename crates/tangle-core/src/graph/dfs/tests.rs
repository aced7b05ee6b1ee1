use crate::graph::{dfs, Graph, Node};

/// Undirected: 1 - 2, 2 - 3, 2 - 4
fn branching_undirected() -> Graph {
    let mut graph = Graph::undirected();
    for id in 1..=4 {
        graph.add_node(Node::new(id));
    }
    assert!(graph.add_edge(1, 2, 0));
    assert!(graph.add_edge(2, 3, 0));
    assert!(graph.add_edge(2, 4, 0));
    graph
}

/// Directed: 1 -> 2 (dead end), 1 -> 3 -> 4
fn forked_directed() -> Graph {
    let mut graph = Graph::directed();
    for id in 1..=4 {
        graph.add_node(Node::new(id));
    }
    assert!(graph.add_edge(1, 2, 0));
    assert!(graph.add_edge(1, 3, 0));
    assert!(graph.add_edge(3, 4, 0));
    graph
}

#[test]
fn test_traversal_order_is_preorder_in_adjacency_order() {
    let graph = branching_undirected();
    assert_eq!(dfs::traversal_order(&graph, 1), vec![1, 2, 3, 4]);
    assert_eq!(dfs::traversal_order(&graph, 4), vec![4, 2, 1, 3]);
}

#[test]
fn test_traversal_order_missing_start_is_empty() {
    let graph = branching_undirected();
    assert!(dfs::traversal_order(&graph, 42).is_empty());
}

#[test]
fn test_traversal_order_isolated_start() {
    let mut graph = Graph::directed();
    graph.add_node(Node::new(1));
    graph.add_node(Node::new(2));
    assert_eq!(dfs::traversal_order(&graph, 1), vec![1]);
}

#[test]
fn test_traversal_order_survives_cycles() {
    let mut graph = Graph::directed();
    for id in 1..=3 {
        graph.add_node(Node::new(id));
    }
    assert!(graph.add_edge(1, 2, 0));
    assert!(graph.add_edge(2, 3, 0));
    assert!(graph.add_edge(3, 1, 0));
    assert_eq!(dfs::traversal_order(&graph, 2), vec![2, 3, 1]);
}

#[test]
fn test_find_path_follows_adjacency_order() {
    let graph = branching_undirected();
    assert_eq!(dfs::find_path(&graph, 1, 4), Some(vec![1, 2, 4]));
}

#[test]
fn test_find_path_backtracks_out_of_dead_ends() {
    let graph = forked_directed();
    // the first branch (1 -> 2) dead-ends and is retracted
    assert_eq!(dfs::find_path(&graph, 1, 4), Some(vec![1, 3, 4]));
}

#[test]
fn test_find_path_is_not_necessarily_shortest() {
    // 1 - 2 - 3 plus shortcut 1 - 3; adjacency order sends DFS the long way
    let mut graph = Graph::undirected();
    for id in 1..=3 {
        graph.add_node(Node::new(id));
    }
    assert!(graph.add_edge(1, 2, 0));
    assert!(graph.add_edge(2, 3, 0));
    assert!(graph.add_edge(1, 3, 0));
    assert_eq!(dfs::find_path(&graph, 1, 3), Some(vec![1, 2, 3]));
}

#[test]
fn test_find_path_same_start_and_goal() {
    let graph = branching_undirected();
    assert_eq!(dfs::find_path(&graph, 2, 2), Some(vec![2]));
}

#[test]
fn test_find_path_no_route() {
    let graph = forked_directed();
    assert_eq!(dfs::find_path(&graph, 2, 4), None);
    assert_eq!(dfs::find_path(&graph, 4, 1), None);
}

#[test]
fn test_find_path_missing_start() {
    let graph = branching_undirected();
    assert_eq!(dfs::find_path(&graph, 42, 1), None);
}

#[test]
fn test_spanning_tree_depth_first_edges() {
    let graph = branching_undirected();
    let tree = dfs::spanning_tree(&graph, 1).unwrap();

    assert_eq!(tree.nodes().len(), 4);
    assert_eq!(tree.edges().len(), 3);
    assert!(!tree.is_directed());
    assert!(tree.find_edge_between(1, 2).is_some());
    assert!(tree.find_edge_between(2, 3).is_some());
    assert!(tree.find_edge_between(2, 4).is_some());
}

#[test]
fn test_spanning_tree_breaks_cycles_depth_first() {
    // triangle: DFS descends 1 -> 2 -> 3, so no edge 1 - 3
    let mut graph = Graph::undirected();
    for id in 1..=3 {
        graph.add_node(Node::new(id));
    }
    assert!(graph.add_edge(1, 2, 0));
    assert!(graph.add_edge(2, 3, 0));
    assert!(graph.add_edge(3, 1, 0));

    let tree = dfs::spanning_tree(&graph, 1).unwrap();
    assert_eq!(tree.edges().len(), 2);
    assert!(tree.find_edge_between(1, 2).is_some());
    assert!(tree.find_edge_between(2, 3).is_some());
    assert!(tree.find_edge_between(1, 3).is_none());
}

#[test]
fn test_spanning_tree_keeps_directedness() {
    let graph = forked_directed();
    let tree = dfs::spanning_tree(&graph, 1).unwrap();
    assert!(tree.is_directed());
    assert_eq!(tree.nodes().len(), 4);
    assert_eq!(tree.edges().len(), 3);
}

#[test]
fn test_spanning_tree_missing_root() {
    let graph = branching_undirected();
    assert!(dfs::spanning_tree(&graph, 42).is_none());
}
