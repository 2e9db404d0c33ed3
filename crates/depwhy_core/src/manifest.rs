use log::{debug, trace};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::types::{DepCategory, DependencyEdge};

/// Parsed package.json manifest. Read-only once loaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestRecord {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, String>,
    #[serde(rename = "optionalDependencies")]
    pub optional_dependencies: BTreeMap<String, String>,
}

/// Why a manifest could not be loaded. Traversal call sites collapse every
/// variant to "no manifest here", but callers that care can still tell a
/// missing file from a broken one.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no manifest at {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load and parse a manifest file.
///
/// A broken or partially-installed module must not abort a whole traversal,
/// so callers are expected to treat any error as an absent manifest.
pub fn read_manifest(path: &Path) -> Result<ManifestRecord, ManifestError> {
    trace!("Reading manifest at {}", path.display());
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            trace!("No manifest at {}", path.display());
            return Err(ManifestError::Missing(path.to_path_buf()));
        }
        Err(e) => {
            debug!("Unreadable manifest at {}: {}", path.display(), e);
            return Err(ManifestError::Unreadable { path: path.to_path_buf(), source: e });
        }
    };

    match serde_json::from_str::<ManifestRecord>(&content) {
        Ok(record) => Ok(record),
        Err(e) => {
            debug!("Malformed manifest at {}: {}", path.display(), e);
            Err(ManifestError::Malformed { path: path.to_path_buf(), source: e })
        }
    }
}

impl ManifestRecord {
    /// Flatten the four dependency maps into one ordered edge list.
    ///
    /// Maps merge in the order production, development, peer, optional. A
    /// name declared in more than one map keeps its first-seen position but
    /// reports the category of the last map that declared it, matching the
    /// overwrite-by-key behavior of merging plain objects.
    pub fn flatten_edges(&self) -> Vec<DependencyEdge> {
        let sections = [
            (&self.dependencies, DepCategory::Production),
            (&self.dev_dependencies, DepCategory::Development),
            (&self.peer_dependencies, DepCategory::Peer),
            (&self.optional_dependencies, DepCategory::Optional),
        ];

        let mut edges: Vec<DependencyEdge> = Vec::new();
        for (map, category) in sections {
            for name in map.keys() {
                if let Some(existing) = edges.iter_mut().find(|e| &e.name == name) {
                    existing.category = category;
                } else {
                    edges.push(DependencyEdge { name: name.clone(), category });
                }
            }
        }

        trace!("Flattened {} dependency edges", edges.len());
        edges
    }
}
