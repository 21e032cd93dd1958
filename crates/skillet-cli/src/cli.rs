//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Skillet - Sync recipes from the upstream service into a local store
#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Local recipe store with upstream sync", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to SKILLET_HOME or ~/.skillet)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the recipe store
    Init,

    /// List stored recipes
    List,

    /// Show a stored recipe's full payload
    Show {
        /// Recipe id
        id: String,
    },

    /// List deduplicated ingredients across all stored recipes
    Ingredients,

    /// Fetch and store today's recipes
    Sync {
        /// Fetch even if today's recipes are already stored
        #[arg(long)]
        force: bool,
    },

    /// Fetch one recipe by id or sharing URL and store it
    Search {
        /// Recipe id (24-char hex) or sharing URL
        identifier: String,
    },

    /// Fetch and store all favorite recipes
    Favorites,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static UI files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
