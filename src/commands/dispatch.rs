//! Command dispatch logic for tangle

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{edge, export, graphs, info, menu, node, traverse};
use crate::commands::traverse::Engine;
use tangle_core::error::{Result, TangleError};
use tangle_core::store::Store;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = cli.root.clone().unwrap_or_else(Store::default_root);

    tracing::debug!(root = %root.display(), elapsed = ?start.elapsed(), "resolve_root");

    match &cli.command {
        None => Err(TangleError::UsageError(
            "no command given (try `tangle --help` or `tangle menu`)".to_string(),
        )),

        Some(Commands::Init) => graphs::init(cli, &root),

        Some(Commands::Create {
            name,
            directed,
            undirected,
        }) => graphs::create(cli, &root, name, *directed, *undirected),

        Some(Commands::List) => graphs::list(cli, &root),

        Some(Commands::Show { name }) => graphs::show(cli, &root, name),

        Some(Commands::Delete { name }) => graphs::delete(cli, &root, name),

        Some(Commands::Node { command }) => node::run(cli, &root, command),

        Some(Commands::Edge { command }) => edge::run(cli, &root, command),

        Some(Commands::Info { name, id }) => info::run(cli, &root, name, *id),

        Some(Commands::Bfs { command }) => traverse::run(cli, &root, Engine::Bfs, command),

        Some(Commands::Dfs { command }) => traverse::run(cli, &root, Engine::Dfs, command),

        Some(Commands::Export { name }) => export::run(cli, &root, name),

        Some(Commands::Menu) => menu::run(cli, &root),
    }
}
