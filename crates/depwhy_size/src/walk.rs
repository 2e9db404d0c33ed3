use log::trace;
use std::{fs, path::Path};

use depwhy_core::{EXCLUDED_DIRS, NODE_MODULES, SOURCE_EXTENSIONS};

/// Sum the sizes of every regular file under `path`, descending into every
/// subdirectory with no exclusions. Unreadable entries contribute zero; this
/// is an estimate, not an audit.
pub fn dir_size(path: &Path) -> u64 {
    sum_files(path, &|_| true, &|_| true)
}

/// Sum only source-code files, skipping documentation, test and type
/// declaration directories as well as nested node_modules, whose contents
/// belong to a deeper manifest walk.
pub fn source_size(path: &Path) -> u64 {
    sum_files(
        path,
        &|dir_name| dir_name != NODE_MODULES && !EXCLUDED_DIRS.contains(&dir_name),
        &is_source_file,
    )
}

/// Size of the whole top-level install tree: every source-code file under the
/// project's node_modules, with no directory exclusions. Used as the
/// denominator for percent-of-install-tree.
pub fn install_tree_size(project_root: &Path) -> u64 {
    sum_files(&project_root.join(NODE_MODULES), &|_| true, &is_source_file)
}

fn is_source_file(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => SOURCE_EXTENSIONS.contains(&ext),
        None => false,
    }
}

fn sum_files(path: &Path, descend: &dyn Fn(&str) -> bool, count: &dyn Fn(&str) -> bool) -> u64 {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            trace!("Skipping unreadable directory {}: {}", path.display(), e);
            return 0;
        }
    };

    let mut total = 0u64;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Ok(file_type) = entry.file_type() else { continue };

        if file_type.is_dir() {
            if descend(name) {
                total += sum_files(&entry.path(), descend, count);
            } else {
                trace!("Excluding directory {}", entry.path().display());
            }
        } else if file_type.is_file() && count(name) {
            total += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
    }
    total
}
