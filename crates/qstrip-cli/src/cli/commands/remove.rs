//! `qstrip remove <url> (<index> | --all)` – print the URL with queries removed.

use anyhow::{Context, Result};
use qstrip_core::{RemoveQueriesModule, RemoveTarget};

pub fn run_remove(module: &RemoveQueriesModule, url: &str, target: RemoveTarget) -> Result<()> {
    let edited = module
        .remove_query(url, target)
        .with_context(|| format!("cannot remove query from {url}"))?;
    println!("{edited}");
    Ok(())
}
