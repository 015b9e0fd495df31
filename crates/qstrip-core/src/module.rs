//! Host-facing "remove queries" module.
//!
//! A host (UI, CLI, pipeline) hands over the current URL whenever it
//! changes and gets back what to show; on a user removal it hands over the
//! current URL again and gets the edited one. Nothing is kept between
//! calls: every call re-parses the URL it is given.

use crate::config::Labels;
use crate::error::QueryError;
use crate::url_parts::{RemoveTarget, UrlParts};
use serde::Serialize;
use std::fmt;

/// Static description of a module, shown by hosts in their module list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub can_be_enabled: bool,
}

/// Interface between a host and a URL-inspecting module.
pub trait UrlModule {
    fn descriptor(&self) -> ModuleDescriptor;

    /// Called by the host whenever its current URL changes.
    fn on_url_changed(&self, url: &str) -> RenderInstruction;
}

/// How many queries the current URL has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum QuerySummary {
    NoQueries,
    One,
    Many(usize),
}

impl QuerySummary {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => QuerySummary::NoQueries,
            1 => QuerySummary::One,
            n => QuerySummary::Many(n),
        }
    }

    pub fn count(self) -> usize {
        match self {
            QuerySummary::NoQueries => 0,
            QuerySummary::One => 1,
            QuerySummary::Many(n) => n,
        }
    }

    pub fn text(self, labels: &Labels) -> String {
        match self {
            QuerySummary::NoQueries => labels.no_queries.clone(),
            QuerySummary::One => labels.found_one.clone(),
            QuerySummary::Many(n) => labels.found_many.replace("{count}", &n.to_string()),
        }
    }
}

/// One removable query entry as the host should present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryEntry {
    /// Position to pass back in [`RemoveTarget::Index`].
    pub index: usize,
    /// Text before the first `=`; may be empty.
    pub name: String,
    pub label: String,
}

/// What the host should render for the current URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    pub summary: QuerySummary,
    pub summary_text: String,
    pub entries: Vec<QueryEntry>,
    /// The remove-all control is only useful when there is something to remove.
    pub remove_all_enabled: bool,
}

impl RenderInstruction {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for RenderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary_text)?;
        for entry in &self.entries {
            writeln!(f, "  [{}] {}", entry.index, entry.label)?;
        }
        Ok(())
    }
}

/// Lists the queries of a URL and removes them on request.
#[derive(Debug, Clone, Default)]
pub struct RemoveQueriesModule {
    labels: Labels,
}

impl RemoveQueriesModule {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Parses `current_url`, removes `target` and returns the rejoined URL.
    ///
    /// An index must come from a render of this same URL; indices from an
    /// earlier URL may no longer be valid and fail with
    /// [`QueryError::IndexOutOfRange`].
    pub fn remove_query(&self, current_url: &str, target: RemoveTarget) -> Result<String, QueryError> {
        let mut parts = UrlParts::parse(current_url);
        parts.remove(target)?;
        let url = parts.join();
        tracing::debug!(?target, remaining = parts.count(), "query removal applied");
        Ok(url)
    }

    fn entry_label(&self, name: &str) -> String {
        if name.is_empty() {
            self.labels.empty_entry.clone()
        } else {
            self.labels.remove_one.replace("{name}", name)
        }
    }
}

impl UrlModule for RemoveQueriesModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            id: "removeQueries",
            name: "Remove queries",
            description: "Lists the queries of the url (like ?foo=bar) and lets you remove \
                          them one by one or all at once.",
            can_be_enabled: true,
        }
    }

    fn on_url_changed(&self, url: &str) -> RenderInstruction {
        let parts = UrlParts::parse(url);
        let summary = QuerySummary::from_count(parts.count());
        let entries = parts
            .names()
            .enumerate()
            .map(|(index, name)| QueryEntry {
                index,
                name: name.to_string(),
                label: self.entry_label(name),
            })
            .collect();

        RenderInstruction {
            summary,
            summary_text: summary.text(&self.labels),
            entries,
            remove_all_enabled: summary != QuerySummary::NoQueries,
        }
    }
}
