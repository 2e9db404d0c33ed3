use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::{MANIFEST_FILE, NODE_MODULES};

/// Compute the install directory a module would occupy under `dir`.
///
/// Scoped names like `@scope/name` nest one level deeper, so the name is
/// joined segment by segment rather than as a single component.
pub fn module_dir(dir: &Path, name: &str) -> PathBuf {
    let mut p = dir.join(NODE_MODULES);
    for segment in name.split('/') {
        p.push(segment);
    }
    clean(p)
}

/// Find a module's manifest by searching nested install directories outward
/// toward the filesystem root.
///
/// This approximates how a hoisting-capable installer places shared modules
/// at higher directory levels. Returns the manifest path, or None when no
/// ancestor holds the module. Read-only stat calls, no registry access.
pub fn locate_module(name: &str, start_dir: &Path) -> Option<PathBuf> {
    trace!("Locating module '{}' from {}", name, start_dir.display());
    let mut dir = start_dir.to_path_buf();

    loop {
        let candidate = module_dir(&dir, name).join(MANIFEST_FILE);
        if candidate.is_file() {
            trace!("Found '{}' at {}", name, candidate.display());
            return Some(candidate);
        }

        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => {
                trace!("Module '{}' not found in any ancestor of {}", name, start_dir.display());
                return None;
            }
        }
    }
}
