use anyhow::Result;
use log::{debug, info};

use depwhy_core::{ModuleNotFound, find_project_root, locate_module, read_manifest};

use crate::{
    config::Config,
    resolver::{dedupe_chains, resolve_chains},
    suggest::synthesize_suggestions,
    types::ExplainReport,
};

pub fn run_explain(mut cfg: Config) -> Result<ExplainReport> {
    info!("Explaining '{}'", cfg.module);

    // Resolve root directory
    let root = if let Some(r) = cfg.root.take() {
        debug!("Using provided root directory: {:?}", r);
        r.canonicalize().unwrap_or(r)
    } else {
        debug!("No root provided, searching for project root");
        find_project_root()?
    };
    info!("Using root directory: {}", root.display());

    // A target with no locatable manifest anywhere terminates the whole
    // operation before traversal begins.
    let target_manifest =
        locate_module(&cfg.module, &root).ok_or_else(|| ModuleNotFound(cfg.module.clone()))?;
    let version = read_manifest(&target_manifest).ok().and_then(|m| m.version);
    debug!("Target resolved to {} (version {:?})", target_manifest.display(), version);

    let chains = dedupe_chains(resolve_chains(&cfg.module, &root, cfg.max_depth));
    let suggestions = synthesize_suggestions(&cfg.module, &chains);

    info!("Found {} chains, {} suggestions", chains.len(), suggestions.len());

    Ok(ExplainReport { module: cfg.module, version, root, chains, suggestions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use depwhy_core::{MANIFEST_FILE, module_dir};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn install_module(root: &Path, name: &str, manifest: &str) {
        let dir = module_dir(root, name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
    }

    fn config(module: &str, root: &Path) -> Config {
        Config { module: module.to_string(), root: Some(root.to_path_buf()), max_depth: 10 }
    }

    #[test]
    fn test_run_explain_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(MANIFEST_FILE), r#"{"dependencies": {"x": "*", "y": "*"}}"#).unwrap();
        install_module(root, "x", r#"{"name": "x", "version": "2.0.0"}"#);
        install_module(root, "y", r#"{"name": "y", "dependencies": {"x": "*"}}"#);

        let report = run_explain(config("x", root)).unwrap();
        assert_eq!(report.module, "x");
        assert_eq!(report.version.as_deref(), Some("2.0.0"));
        assert_eq!(report.chains.len(), 2);
        assert!(report.suggestions.iter().any(|s| s.kind == crate::SuggestionKind::RedundantDirect));
    }

    #[test]
    fn test_run_explain_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(MANIFEST_FILE), r#"{"dependencies": {}}"#).unwrap();

        let err = run_explain(config("ghost", root)).unwrap_err();
        assert!(err.downcast_ref::<ModuleNotFound>().is_some());
    }

    #[test]
    fn test_run_explain_installed_but_undeclared() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(MANIFEST_FILE), r#"{"dependencies": {}}"#).unwrap();
        install_module(root, "stray", r#"{"name": "stray"}"#);

        // Locatable on disk, so not a NotFound error; the resolver just
        // returns no chains.
        let report = run_explain(config("stray", root)).unwrap();
        assert!(report.chains.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_run_explain_missing_root_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        install_module(root, "x", r#"{"name": "x"}"#);

        let report = run_explain(config("x", root)).unwrap();
        assert!(report.chains.is_empty());
    }

    #[test]
    fn test_config_root_canonicalized() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(MANIFEST_FILE), r#"{"dependencies": {"x": "*"}}"#).unwrap();
        install_module(root, "x", r#"{"name": "x"}"#);

        // A non-canonical root (trailing component navigation) still works.
        let dotted: PathBuf = root.join("node_modules").join("..");
        let report = run_explain(config("x", &dotted)).unwrap();
        assert_eq!(report.chains.len(), 1);
    }
}
