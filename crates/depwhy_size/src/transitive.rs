use anyhow::Result;
use log::{debug, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use depwhy_core::{MANIFEST_FILE, ModuleNotFound, locate_module, module_dir, read_manifest};

use crate::{
    types::{SizeBreakdownEntry, SizeReport},
    walk::{install_tree_size, source_size},
};

/// Measure a module's own footprint plus every transitive dependency,
/// counting each uniquely named module exactly once.
///
/// A diamond-shaped graph (two modules sharing a third dependency) must
/// contribute the shared module's size once, matching how a hoisting
/// installer physically stores one copy on disk.
pub fn measure_transitive(module: &str, project_root: &Path) -> Result<SizeReport> {
    debug!("Measuring transitive size of '{}' in {}", module, project_root.display());

    let manifest_path = locate_module(module, project_root)
        .ok_or_else(|| ModuleNotFound(module.to_string()))?;
    let target_dir = manifest_path.parent().unwrap_or(project_root).to_path_buf();

    let own_bytes = source_size(&target_dir);
    trace!("Own size of '{}': {} bytes", module, own_bytes);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(module.to_string());

    let mut entries: Vec<SizeBreakdownEntry> = Vec::new();
    collect_dependency_sizes(&manifest_path, &target_dir, project_root, &mut visited, &mut entries);

    entries.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.name.cmp(&b.name)));

    let total_bytes = own_bytes + entries.iter().map(|e| e.bytes).sum::<u64>();
    let install_tree_bytes = install_tree_size(project_root);
    let percent_of_install_tree = if install_tree_bytes > 0 {
        total_bytes as f64 / install_tree_bytes as f64 * 100.0
    } else {
        0.0
    };

    // The own entry leads the breakdown regardless of magnitude.
    let mut breakdown = vec![SizeBreakdownEntry { name: module.to_string(), bytes: own_bytes }];
    breakdown.extend(entries);

    debug!(
        "'{}' totals {} bytes across {} modules ({:.1}% of install tree)",
        module,
        total_bytes,
        breakdown.len(),
        percent_of_install_tree
    );

    Ok(SizeReport {
        module: module.to_string(),
        own_bytes,
        breakdown,
        total_bytes,
        install_tree_bytes,
        percent_of_install_tree,
    })
}

fn collect_dependency_sizes(
    manifest_path: &Path,
    parent_dir: &Path,
    project_root: &Path,
    visited: &mut HashSet<String>,
    entries: &mut Vec<SizeBreakdownEntry>,
) {
    let record = match read_manifest(manifest_path) {
        Ok(r) => r,
        Err(e) => {
            trace!("Skipping dependency walk: {}", e);
            return;
        }
    };

    for edge in record.flatten_edges() {
        if !visited.insert(edge.name.clone()) {
            trace!("Already counted '{}'", edge.name);
            continue;
        }

        let Some((dep_dir, dep_manifest)) = find_install_dir(&edge.name, parent_dir, project_root)
        else {
            trace!("No install directory for '{}'", edge.name);
            continue;
        };

        let bytes = source_size(&dep_dir);
        trace!("'{}' adds {} bytes", edge.name, bytes);
        entries.push(SizeBreakdownEntry { name: edge.name.clone(), bytes });

        collect_dependency_sizes(&dep_manifest, &dep_dir, project_root, visited, entries);
    }
}

/// Prefer an install directory nested under the parent module, falling back
/// to the project-root install directory. Approximates hoisting.
fn find_install_dir(
    name: &str,
    parent_dir: &Path,
    project_root: &Path,
) -> Option<(PathBuf, PathBuf)> {
    for base in [parent_dir, project_root] {
        let dir = module_dir(base, name);
        let manifest = dir.join(MANIFEST_FILE);
        if manifest.is_file() {
            return Some((dir, manifest));
        }
    }
    None
}
