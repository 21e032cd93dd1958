//! Skillet CLI - local recipe store with upstream sync
//!
//! Usage:
//!   skillet init                 Initialize the recipe store
//!   skillet sync                 Fetch and store today's recipes
//!   skillet list                 List stored recipes
//!   skillet serve --port 3000    Start the web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let settings = commands::load_settings(cli.data_dir.as_ref())?;

    match cli.command {
        Commands::Init => commands::cmd_init(&settings),
        Commands::List => {
            let store = commands::open_store(&settings)?;
            commands::cmd_list(&store)
        }
        Commands::Show { id } => {
            let store = commands::open_store(&settings)?;
            commands::cmd_show(&store, &id)
        }
        Commands::Ingredients => {
            let store = commands::open_store(&settings)?;
            commands::cmd_ingredients(&store)
        }
        Commands::Sync { force } => {
            let store = commands::open_store(&settings)?;
            commands::cmd_sync(&settings, &store, force).await
        }
        Commands::Search { identifier } => {
            let store = commands::open_store(&settings)?;
            commands::cmd_search(&settings, &store, &identifier).await
        }
        Commands::Favorites => {
            let store = commands::open_store(&settings)?;
            commands::cmd_favorites(&settings, &store).await
        }
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let store = commands::open_store(&settings)?;
            commands::cmd_serve(settings, store, &host, port, static_dir.as_deref()).await
        }
    }
}
