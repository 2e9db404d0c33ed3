use anyhow::Result;
use log::{debug, info};

use depwhy_core::find_project_root;

use crate::{config::Config, transitive::measure_transitive, types::SizeReport};

pub fn run_size_report(mut cfg: Config) -> Result<SizeReport> {
    info!("Measuring '{}'", cfg.module);

    // Resolve root directory
    let root = if let Some(r) = cfg.root.take() {
        debug!("Using provided root directory: {:?}", r);
        r.canonicalize().unwrap_or(r)
    } else {
        debug!("No root provided, searching for project root");
        find_project_root()?
    };
    info!("Using root directory: {}", root.display());

    measure_transitive(&cfg.module, &root)
}
