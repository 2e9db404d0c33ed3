use anyhow::{Result, anyhow};
use log::{debug, trace};
use std::{env, path::PathBuf};

use crate::constants::MANIFEST_FILE;

/// Find the nearest ancestor directory holding a package.json.
///
/// Used when no explicit --root is given, so the tool works from anywhere
/// inside a project.
pub fn find_project_root() -> Result<PathBuf> {
    debug!("Searching for project root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let manifest = current_dir.join(MANIFEST_FILE);
        trace!("Checking for manifest at: {:?}", manifest);
        if manifest.is_file() {
            debug!("Found project root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find package.json in any parent folder");
                return Err(anyhow!("Could not find package.json in any parent folder"));
            }
        }
    }
}
