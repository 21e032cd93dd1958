//! Server command implementation

use std::path::Path;

use anyhow::{anyhow, Result};

use skillet_core::{RecipeStore, Settings};

pub async fn cmd_serve(
    settings: Settings,
    store: RecipeStore,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    let static_dir_str = static_dir
        .map(|p| {
            p.to_str()
                .ok_or_else(|| anyhow!("Static dir path is not valid UTF-8: {}", p.display()))
        })
        .transpose()?;

    println!("🚀 Starting Skillet web server...");
    println!("   Database: {}", store.path().display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!();
    println!("   Press Ctrl+C to stop");

    skillet_server::serve(store, settings, host, port, static_dir_str).await
}
