//! A registry of validated flows, loaded from JSON files.
//!
//! Only definitions that pass integrity validation are registered. Rejected
//! files are kept aside with their error so a front end can report them.
use crate::error::LoadError;
use crate::flow::FlowMetadata;
use crate::graph::FlowGraph;
use ahash::AHashMap;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Category used for flows that declare none.
pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Default)]
pub struct FlowCatalog {
    flows: AHashMap<String, FlowGraph>,
    rejected: Vec<(PathBuf, LoadError)>,
}

impl FlowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.json` file in `dir`, in file-name order.
    ///
    /// Only failing to read the directory itself is an error; an entry or file that
    /// cannot be read, parsed or validated is recorded in [`FlowCatalog::rejected`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| LoadError::Io {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_listing(dir, entries.map(|entry| entry.map(|e| e.path()))))
    }

    /// Loads the `*.json` files of a directory listing produced elsewhere.
    ///
    /// Listing errors are recorded against `dir` in [`FlowCatalog::rejected`].
    pub fn from_listing<I>(dir: &Path, listing: I) -> Self
    where
        I: IntoIterator<Item = io::Result<PathBuf>>,
    {
        let mut catalog = Self::new();
        let mut paths = Vec::new();
        for entry in listing {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "unreadable directory entry");
                    catalog.rejected.push((
                        dir.to_path_buf(),
                        LoadError::Io {
                            path: dir.display().to_string(),
                            message: e.to_string(),
                        },
                    ));
                }
            }
        }

        let paths = paths
            .into_iter()
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .sorted();
        for path in paths {
            if let Err(e) = catalog.insert_file(&path).map(|_| ()) {
                warn!(path = %path.display(), error = %e, "rejected flow file");
                catalog.rejected.push((path, e));
            }
        }
        debug!(
            dir = %dir.display(),
            loaded = catalog.flows.len(),
            rejected = catalog.rejected.len(),
            "loaded flow catalog"
        );
        catalog
    }

    pub fn insert_file(&mut self, path: &Path) -> Result<&FlowGraph, LoadError> {
        let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.insert_json(&json)
    }

    pub fn insert_json(&mut self, json: &str) -> Result<&FlowGraph, LoadError> {
        let graph = FlowGraph::from_json(json)?;
        Ok(self.insert(graph))
    }

    /// Registers a validated graph. A flow with the same id is replaced.
    pub fn insert(&mut self, graph: FlowGraph) -> &FlowGraph {
        match self.flows.entry(graph.id().to_string()) {
            Entry::Occupied(mut slot) => {
                warn!(flow = %slot.key(), "flow id registered twice, keeping the later definition");
                slot.insert(graph);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(graph),
        }
    }

    pub fn get(&self, id: &str) -> Option<&FlowGraph> {
        self.flows.get(id)
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn rejected(&self) -> &[(PathBuf, LoadError)] {
        &self.rejected
    }

    /// Metadata of every registered flow, sorted by title then id.
    pub fn metadata(&self) -> Vec<&FlowMetadata> {
        self.flows
            .values()
            .map(FlowGraph::metadata)
            .sorted_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)))
            .collect()
    }

    /// Metadata grouped by category. Flows without one land in [`DEFAULT_CATEGORY`].
    pub fn by_category(&self) -> BTreeMap<String, Vec<&FlowMetadata>> {
        self.metadata()
            .into_iter()
            .map(|m| {
                let category = m.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
                (category.to_string(), m)
            })
            .into_group_map()
            .into_iter()
            .collect()
    }

    /// Case-insensitive substring search over title, description and tags.
    pub fn search(&self, query: &str) -> Vec<&FlowMetadata> {
        let query = query.to_lowercase();
        self.metadata()
            .into_iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&query)
                    || m.description.to_lowercase().contains(&query)
                    || m.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }
}
