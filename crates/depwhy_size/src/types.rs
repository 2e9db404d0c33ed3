use serde::Serialize;

/// One module's cumulative contribution to a transitive size breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SizeBreakdownEntry {
    pub name: String,
    pub bytes: u64,
}

/// Full size picture for a module and its transitive dependency subtree.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub module: String,
    /// The target's own filtered footprint, independent of its dependencies.
    pub own_bytes: u64,
    /// Own entry first, then dependencies by descending size.
    pub breakdown: Vec<SizeBreakdownEntry>,
    pub total_bytes: u64,
    pub install_tree_bytes: u64,
    pub percent_of_install_tree: f64,
}
