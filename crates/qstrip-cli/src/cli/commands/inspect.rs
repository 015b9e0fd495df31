//! `qstrip inspect <url>` – list the queries of a URL.

use anyhow::Result;
use qstrip_core::{RemoveQueriesModule, UrlModule};

pub fn run_inspect(module: &RemoveQueriesModule, url: &str, json: bool) -> Result<()> {
    print!("{}", render_inspect(module, url, json)?);
    Ok(())
}

pub(crate) fn render_inspect(module: &RemoveQueriesModule, url: &str, json: bool) -> Result<String> {
    let render = module.on_url_changed(url);
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&render)?))
    } else {
        Ok(render.to_string())
    }
}
