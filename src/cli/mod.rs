//! CLI argument parsing for tangle
//!
//! Uses clap derive. Global flags: --root, --format, --quiet, --verbose,
//! --log-level, --log-json.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Tangle - graph workbench CLI
#[derive(Parser, Debug)]
#[command(name = "tangle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store root directory (default: platform data dir)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a graph store
    Init,

    /// Create a new empty graph
    Create {
        /// Graph name
        name: String,

        /// Make the graph directed
        #[arg(long, conflicts_with = "undirected")]
        directed: bool,

        /// Make the graph undirected
        #[arg(long)]
        undirected: bool,
    },

    /// List saved graphs
    List,

    /// Print a graph with its adjacency lists
    Show {
        /// Graph name
        name: String,
    },

    /// Delete a saved graph
    Delete {
        /// Graph name
        name: String,
    },

    /// Node operations
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },

    /// Edge operations
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },

    /// Inspect a single node
    Info {
        /// Graph name
        name: String,

        /// Node identifier
        id: u32,
    },

    /// Breadth-first search
    Bfs {
        #[command(subcommand)]
        command: TraverseCommands,
    },

    /// Depth-first search
    Dfs {
        #[command(subcommand)]
        command: TraverseCommands,
    },

    /// Export a graph as CSV node/edge tables
    Export {
        /// Graph name
        name: String,
    },

    /// Interactive console menu
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// Add a node
    Add {
        /// Graph name
        graph: String,

        /// Node identifier; 0 (or a taken id) is reassigned automatically
        #[arg(long, default_value_t = 0)]
        id: u32,

        /// Payload stored with the node
        #[arg(long)]
        content: Option<String>,
    },

    /// Remove a node and every edge touching it
    Rm {
        /// Graph name
        graph: String,

        /// Node identifier
        id: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Add an edge between two existing nodes
    Add {
        /// Graph name
        graph: String,

        /// Source (first) node id
        a: u32,

        /// Target (second) node id
        b: u32,

        /// Edge identifier; 0 (or a taken id) is reassigned automatically
        #[arg(long, default_value_t = 0)]
        id: u32,
    },

    /// Remove an edge by id or by endpoint pair
    Rm {
        /// Graph name
        graph: String,

        /// Source (first) node id
        a: Option<u32>,

        /// Target (second) node id
        b: Option<u32>,

        /// Edge identifier
        #[arg(long, conflicts_with_all = ["a", "b"])]
        id: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TraverseCommands {
    /// Visit order from a start node
    Order {
        /// Graph name
        graph: String,

        /// Start node id
        start: u32,
    },

    /// Path between two nodes
    Path {
        /// Graph name
        graph: String,

        /// Start node id
        from: u32,

        /// Goal node id
        to: u32,
    },

    /// Derived spanning tree from a root node
    Tree {
        /// Graph name
        graph: String,

        /// Root node id
        // named root_id so the arg id cannot collide with the global --root
        #[arg(value_name = "ROOT")]
        root_id: u32,

        /// Save the tree back into the store under this name
        #[arg(long)]
        save: Option<String>,
    },
}
