//! Graph store: a directory of saved graph documents
//!
//! Layout:
//! - `<root>/graphs/<name>.json` — one document per saved graph
//! - `<root>/config.toml` — store configuration
//! - `<root>/<export_dir>/<name>/` — CSV export target per graph

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::{Result, TangleError};
use crate::export;
use crate::graph::Graph;
use crate::persist::GraphDocument;

/// Subdirectory holding saved graph documents
pub const GRAPHS_DIR: &str = "graphs";
/// Store configuration file name
pub const CONFIG_FILE: &str = "config.toml";

/// The tangle store
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    config: StoreConfig,
}

impl Store {
    /// Create the store layout at `root` (idempotent) and open it
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root.join(GRAPHS_DIR))?;

        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            let config = StoreConfig::default();
            config.save(&config_path)?;
            config
        };

        Ok(Store {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Open an existing store at `root`
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.join(GRAPHS_DIR).is_dir() {
            return Err(TangleError::StoreNotFound {
                search_root: root.to_path_buf(),
            });
        }

        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        Ok(Store {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Default store root under the platform data directory
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("tangle"))
            .unwrap_or_else(|| PathBuf::from(".tangle"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Names of all saved graphs, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.root.join(GRAPHS_DIR))? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Whether a graph with this name is saved
    pub fn exists(&self, name: &str) -> bool {
        self.graph_path(name).map(|path| path.is_file()).unwrap_or(false)
    }

    /// Write a graph document under the given name, replacing any previous one
    #[tracing::instrument(skip(self, graph), fields(name = name))]
    pub fn save(&self, name: &str, graph: &Graph) -> Result<()> {
        let path = self.graph_path(name)?;
        let document = GraphDocument::from_graph(graph);
        fs::write(&path, document.to_json()?)?;
        tracing::debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            path = %path.display(),
            "saved graph"
        );
        Ok(())
    }

    /// Load a saved graph's document by name
    pub fn load_document(&self, name: &str) -> Result<GraphDocument> {
        let path = self.graph_path(name)?;
        if !path.is_file() {
            return Err(TangleError::GraphNotFound {
                name: name.to_string(),
            });
        }
        let raw = fs::read_to_string(&path)?;
        GraphDocument::from_json(&raw)
    }

    /// Load a saved graph by name
    #[tracing::instrument(skip(self), fields(name = name))]
    pub fn load(&self, name: &str) -> Result<Graph> {
        self.load_document(name)?.into_graph()
    }

    /// Delete a saved graph by name
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.graph_path(name)?;
        if !path.is_file() {
            return Err(TangleError::GraphNotFound {
                name: name.to_string(),
            });
        }
        fs::remove_file(path)?;
        Ok(())
    }

    /// Export a graph's node/edge CSV tables; returns the directory written
    #[tracing::instrument(skip(self, graph), fields(name = name))]
    pub fn export(&self, name: &str, graph: &Graph) -> Result<PathBuf> {
        validate_name(name)?;
        let dir = self.root.join(&self.config.export_dir).join(name);
        export::write_csv_tables(graph, &dir)?;
        Ok(dir)
    }

    fn graph_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(GRAPHS_DIR).join(format!("{name}.json")))
    }
}

/// Graph names become file names; keep them to a single path component
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        return Err(TangleError::InvalidValue {
            context: "graph name".to_string(),
            value: name.to_string(),
        });
    }
    Ok(())
}
