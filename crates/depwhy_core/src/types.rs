use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Dependency classification under which an edge was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DepCategory {
    Production,
    Development,
    Peer,
    Optional,
}

impl DepCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DepCategory::Production => "prod",
            DepCategory::Development => "dev",
            DepCategory::Peer => "peer",
            DepCategory::Optional => "optional",
        }
    }
}

impl fmt::Display for DepCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One declared dependency inside a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub name: String,
    pub category: DepCategory,
}

/// The target module has no locatable manifest anywhere in the searched
/// directory chain. Raised once, before traversal begins.
#[derive(Debug, Error)]
#[error("module '{0}' is not installed under any node_modules directory")]
pub struct ModuleNotFound(pub String);
