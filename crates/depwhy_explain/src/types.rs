use depwhy_core::DepCategory;
use serde::Serialize;
use std::path::PathBuf;

/// One discovered path from the project root down to the target module.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyChain {
    /// Module names in order, ending in the target.
    pub modules: Vec<String>,
    /// Category under which the final edge was introduced.
    pub category: DepCategory,
    /// Manifest file that declared the final edge.
    pub declared_in: PathBuf,
}

impl DependencyChain {
    pub fn joined(&self) -> String {
        self.modules.join(" > ")
    }

    /// A chain of length one means the project declares the target itself.
    pub fn is_direct(&self) -> bool {
        self.modules.len() == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    RedundantDirect,
    DevOnly,
    PeerExpected,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

/// Plain result record handed to the formatter/CLI.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainReport {
    pub module: String,
    pub version: Option<String>,
    pub root: PathBuf,
    pub chains: Vec<DependencyChain>,
    pub suggestions: Vec<Suggestion>,
}
