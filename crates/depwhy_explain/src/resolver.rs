use log::{debug, trace};
use std::{
    collections::{HashSet, VecDeque},
    path::{Path, PathBuf},
};

use depwhy_core::{DepCategory, MANIFEST_FILE, locate_module, read_manifest};

use crate::types::DependencyChain;

struct QueueItem {
    /// Resolved module name; empty for the project root, which has no name
    /// of its own in a chain.
    module: String,
    /// Ancestor module names, not including `module`.
    chain: Vec<String>,
    manifest: PathBuf,
}

/// Discover every distinct chain of modules leading to `target`, starting
/// from the project's own manifest.
///
/// Breadth-first over a work queue. A (module name, manifest path) pair is
/// expanded at most once; that is the sole cycle guard, so a module reachable
/// via multiple edges may still appear in chains recorded before the guard
/// triggers. Items whose chain exceeds `max_depth` are discarded silently.
/// A missing project manifest yields an empty result, not an error.
pub fn resolve_chains(target: &str, project_root: &Path, max_depth: usize) -> Vec<DependencyChain> {
    debug!("Resolving chains to '{}' from {}", target, project_root.display());

    let mut chains: Vec<DependencyChain> = Vec::new();
    let mut visited: HashSet<(String, PathBuf)> = HashSet::new();
    let mut queue: VecDeque<QueueItem> = VecDeque::new();

    queue.push_back(QueueItem {
        module: String::new(),
        chain: Vec::new(),
        manifest: project_root.join(MANIFEST_FILE),
    });

    while let Some(item) = queue.pop_front() {
        if item.chain.len() > max_depth {
            trace!("Discarding '{}' at depth {}", item.module, item.chain.len());
            continue;
        }

        let record = match read_manifest(&item.manifest) {
            Ok(r) => r,
            Err(e) => {
                trace!("Skipping node: {}", e);
                continue;
            }
        };

        if !visited.insert((item.module.clone(), item.manifest.clone())) {
            trace!("Already expanded '{}' via {}", item.module, item.manifest.display());
            continue;
        }

        let manifest_dir =
            item.manifest.parent().map(Path::to_path_buf).unwrap_or_else(|| project_root.to_path_buf());

        for edge in record.flatten_edges() {
            if edge.name == target {
                let mut modules = item.chain.clone();
                if !item.module.is_empty() {
                    modules.push(item.module.clone());
                }
                modules.push(target.to_string());
                trace!("Found chain: {} ({})", modules.join(" > "), edge.category);
                chains.push(DependencyChain {
                    modules,
                    category: edge.category,
                    declared_in: item.manifest.clone(),
                });
            } else if let Some(dep_manifest) = locate_module(&edge.name, &manifest_dir) {
                let mut chain = item.chain.clone();
                if !item.module.is_empty() {
                    chain.push(item.module.clone());
                }
                queue.push_back(QueueItem { module: edge.name, chain, manifest: dep_manifest });
            } else {
                trace!("Could not locate manifest for '{}'", edge.name);
            }
        }
    }

    debug!("Resolved {} chains before de-duplication", chains.len());
    chains
}

/// Remove chains sharing an identical (category, joined names) key,
/// preserving first-seen order.
pub fn dedupe_chains(chains: Vec<DependencyChain>) -> Vec<DependencyChain> {
    let mut seen: HashSet<(DepCategory, String)> = HashSet::new();
    let deduped: Vec<DependencyChain> =
        chains.into_iter().filter(|c| seen.insert((c.category, c.joined()))).collect();
    debug!("{} chains after de-duplication", deduped.len());
    deduped
}
