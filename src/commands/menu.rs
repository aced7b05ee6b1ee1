//! Interactive console menu
//!
//! Nested numbered menus over the same store and engine operations as the
//! non-interactive commands: manage graphs, edit them, and run BFS/DFS.
//! Invalid or out-of-range choices re-prompt; Ctrl-C or Ctrl-D backs out of
//! the current level.

use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::Value;

use crate::cli::Cli;
use crate::commands::traverse::Engine;
use tangle_core::error::{Result, TangleError};
use tangle_core::graph::{Graph, GraphMode, Node};
use tangle_core::store::Store;

pub fn run(_cli: &Cli, root: &Path) -> Result<()> {
    // the menu is the guided surface; create the store on first use
    let store = Store::init(root)?;
    let mut rl = DefaultEditor::new().map_err(readline_error)?;

    loop {
        match pick(&mut rl, "TANGLE", &["Exit", "Graphs", "Algorithms"])? {
            None | Some(0) => return Ok(()),
            Some(1) => graphs_menu(&mut rl, &store)?,
            Some(2) => algorithms_menu(&mut rl, &store)?,
            Some(_) => {}
        }
    }
}

fn graphs_menu(rl: &mut DefaultEditor, store: &Store) -> Result<()> {
    loop {
        match pick(rl, "GRAPHS", &["Back", "Create graph", "Select graph"])? {
            None | Some(0) => return Ok(()),
            Some(1) => create_graph(rl, store)?,
            Some(2) => selected_graph_menu(rl, store)?,
            Some(_) => {}
        }
    }
}

fn create_graph(rl: &mut DefaultEditor, store: &Store) -> Result<()> {
    let Some(name) = prompt(rl, "Graph name: ")? else {
        return Ok(());
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Ok(());
    }
    if store.exists(&name) {
        println!("that name already exists");
        return Ok(());
    }
    let Some(directed) = confirm(rl, "Directed graph? (y/n): ")? else {
        return Ok(());
    };

    let mode = if directed {
        GraphMode::Directed
    } else {
        GraphMode::Undirected
    };
    let mut graph = Graph::new(mode);
    if edit_graph(rl, &name, &mut graph)? {
        store.save(&name, &graph)?;
        println!("saved graph {name}");
    }
    Ok(())
}

/// Edit loop shared by create and select; returns whether to save
fn edit_graph(rl: &mut DefaultEditor, name: &str, graph: &mut Graph) -> Result<bool> {
    let title = format!("EDIT GRAPH: {name}");
    let options = [
        "Save and back",
        "Discard and back",
        "Add node",
        "Add edge",
        "Remove node",
        "Remove edge",
        "Show graph",
    ];
    loop {
        match pick(rl, &title, &options)? {
            None | Some(1) => return Ok(false),
            Some(0) => return Ok(true),
            Some(2) => add_node_action(rl, graph)?,
            Some(3) => add_edge_action(rl, graph)?,
            Some(4) => remove_node_action(rl, graph)?,
            Some(5) => remove_edge_action(rl, graph)?,
            Some(6) => print!("{graph}"),
            Some(_) => {}
        }
    }
}

fn add_node_action(rl: &mut DefaultEditor, graph: &mut Graph) -> Result<()> {
    let Some(id) = prompt_id(rl, "Node id (0 for automatic): ")? else {
        return Ok(());
    };
    let Some(content) = prompt(rl, "Content (empty for none): ")? else {
        return Ok(());
    };
    let content = content.trim();
    let payload = if content.is_empty() {
        None
    } else {
        Some(Value::String(content.to_string()))
    };
    let assigned = graph.add_node(Node::with_content(id, payload));
    println!("added node {assigned}");
    Ok(())
}

fn add_edge_action(rl: &mut DefaultEditor, graph: &mut Graph) -> Result<()> {
    if graph.is_directed() {
        println!("note: the first id is the source node, the second the target");
    }
    let Some(a) = prompt_id(rl, "First node id: ")? else {
        return Ok(());
    };
    let Some(b) = prompt_id(rl, "Second node id: ")? else {
        return Ok(());
    };
    if graph.add_edge(a, b, 0) {
        println!("added edge ({a},{b})");
    } else {
        println!("could not add the edge; both nodes must exist");
    }
    Ok(())
}

fn remove_node_action(rl: &mut DefaultEditor, graph: &mut Graph) -> Result<()> {
    let Some(id) = prompt_id(rl, "Node id to remove: ")? else {
        return Ok(());
    };
    if graph.remove_node(id) {
        println!("removed node {id}");
    } else {
        println!("no node with id {id}");
    }
    Ok(())
}

fn remove_edge_action(rl: &mut DefaultEditor, graph: &mut Graph) -> Result<()> {
    if graph.is_directed() {
        println!("note: the first id is the source node, the second the target");
    }
    let Some(a) = prompt_id(rl, "First node id: ")? else {
        return Ok(());
    };
    let Some(b) = prompt_id(rl, "Second node id: ")? else {
        return Ok(());
    };
    if graph.remove_edge_between(a, b) {
        println!("removed edge ({a},{b})");
    } else {
        println!("no edge between {a} and {b}");
    }
    Ok(())
}

fn selected_graph_menu(rl: &mut DefaultEditor, store: &Store) -> Result<()> {
    let Some(name) = select_graph(rl, store)? else {
        return Ok(());
    };
    let mut graph = store.load(&name)?;
    let title = format!("GRAPH: {name}");
    let options = [
        "Back (save)",
        "Show graph",
        "Edit graph",
        "Delete graph",
        "List nodes",
        "List edges",
        "Export to CSV",
    ];
    loop {
        match pick(rl, &title, &options)? {
            None => return Ok(()),
            Some(0) => {
                store.save(&name, &graph)?;
                return Ok(());
            }
            Some(1) => print!("{graph}"),
            Some(2) => {
                if edit_graph(rl, &name, &mut graph)? {
                    store.save(&name, &graph)?;
                } else {
                    // discard: fall back to the saved document
                    graph = store.load(&name)?;
                }
            }
            Some(3) => {
                store.delete(&name)?;
                println!("deleted graph {name}");
                return Ok(());
            }
            Some(4) => {
                for node in graph.nodes() {
                    println!("{node}");
                }
            }
            Some(5) => {
                for edge in graph.edges() {
                    println!("Edge({}, {})", edge.id, edge);
                }
            }
            Some(6) => {
                let dir = store.export(&name, &graph)?;
                println!("exported to {}", dir.display());
            }
            Some(_) => {}
        }
    }
}

fn algorithms_menu(rl: &mut DefaultEditor, store: &Store) -> Result<()> {
    let Some(name) = select_graph(rl, store)? else {
        return Ok(());
    };
    let graph = store.load(&name)?;
    let title = format!("ALGORITHMS: {name}");
    loop {
        match pick(rl, &title, &["Back", "BFS", "DFS"])? {
            None | Some(0) => return Ok(()),
            Some(1) => engine_menu(rl, store, &name, &graph, Engine::Bfs)?,
            Some(2) => engine_menu(rl, store, &name, &graph, Engine::Dfs)?,
            Some(_) => {}
        }
    }
}

fn engine_menu(
    rl: &mut DefaultEditor,
    store: &Store,
    name: &str,
    graph: &Graph,
    engine: Engine,
) -> Result<()> {
    let title = format!("{} ON {name}", engine.name().to_uppercase());
    let path_label = match engine {
        Engine::Bfs => "Shortest path",
        Engine::Dfs => "Path",
    };
    loop {
        match pick(rl, &title, &["Back", "Traversal order", path_label, "Spanning tree"])? {
            None | Some(0) => return Ok(()),
            Some(1) => {
                let Some(start) = prompt_id(rl, "Start node id: ")? else {
                    continue;
                };
                let order = engine.order(graph, start);
                if order.is_empty() {
                    println!("start node {start} not in graph");
                } else {
                    println!("order: {order:?}");
                }
            }
            Some(2) => {
                let Some(from) = prompt_id(rl, "Start node id: ")? else {
                    continue;
                };
                let Some(to) = prompt_id(rl, "Goal node id: ")? else {
                    continue;
                };
                match engine.path(graph, from, to) {
                    Some(path) => println!("path: {path:?}"),
                    None => println!("no path from {from} to {to}"),
                }
            }
            Some(3) => spanning_tree_action(rl, store, graph, engine)?,
            Some(_) => {}
        }
    }
}

fn spanning_tree_action(
    rl: &mut DefaultEditor,
    store: &Store,
    graph: &Graph,
    engine: Engine,
) -> Result<()> {
    let Some(root) = prompt_id(rl, "Root node id: ")? else {
        return Ok(());
    };
    let Some(tree) = engine.tree(graph, root) else {
        println!("root node {root} not in graph");
        return Ok(());
    };
    print!("{tree}");

    let Some(save) = confirm(rl, "Save the generated tree? (y/n): ")? else {
        return Ok(());
    };
    if save {
        let Some(tree_name) = prompt(rl, "Tree name: ")? else {
            return Ok(());
        };
        let tree_name = tree_name.trim().to_string();
        if tree_name.is_empty() {
            return Ok(());
        }
        if store.exists(&tree_name) {
            println!("that name already exists");
            return Ok(());
        }
        store.save(&tree_name, &tree)?;
        println!("saved tree as {tree_name}");
    }
    Ok(())
}

/// Show saved graphs and return the chosen name, or None to go back
fn select_graph(rl: &mut DefaultEditor, store: &Store) -> Result<Option<String>> {
    let names = store.list()?;
    if names.is_empty() {
        println!("no graphs saved yet");
        return Ok(None);
    }
    let mut options = vec!["Back".to_string()];
    options.extend(names.iter().cloned());
    let option_refs: Vec<&str> = options.iter().map(String::as_str).collect();
    match pick(rl, "SELECT A GRAPH", &option_refs)? {
        None | Some(0) => Ok(None),
        Some(choice) => Ok(Some(names[choice - 1].clone())),
    }
}

/// Print a numbered menu and read a choice, re-prompting until it is valid.
/// Returns None when the user interrupts (Ctrl-C / Ctrl-D).
fn pick(rl: &mut DefaultEditor, title: &str, options: &[&str]) -> Result<Option<usize>> {
    println!("\n{title}\n");
    for (index, option) in options.iter().enumerate() {
        println!("{index}. {option}");
    }
    loop {
        match rl.readline("Select an option: ") {
            Ok(line) => match line.trim().parse::<usize>() {
                Ok(choice) if choice < options.len() => return Ok(Some(choice)),
                _ => println!("Invalid option, try again."),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(readline_error(err)),
        }
    }
}

/// Read one line of free text; None when the user interrupts
fn prompt(rl: &mut DefaultEditor, text: &str) -> Result<Option<String>> {
    match rl.readline(text) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(readline_error(err)),
    }
}

/// Read a numeric id, re-prompting on non-numeric input
fn prompt_id(rl: &mut DefaultEditor, text: &str) -> Result<Option<u32>> {
    loop {
        match rl.readline(text) {
            Ok(line) => match line.trim().parse::<u32>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => println!("Please enter a number."),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(readline_error(err)),
        }
    }
}

/// Yes/no prompt; None when the user interrupts
fn confirm(rl: &mut DefaultEditor, text: &str) -> Result<Option<bool>> {
    match prompt(rl, text)? {
        Some(line) => Ok(Some(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))),
        None => Ok(None),
    }
}

fn readline_error(err: ReadlineError) -> TangleError {
    TangleError::Other(format!("readline failed: {err}"))
}
