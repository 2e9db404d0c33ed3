//! Core utilities for depwhy tools.
//!
//! This crate provides shared functionality for inspecting installed npm
//! dependencies, including:
//! - Reading and parsing package.json manifests
//! - Locating a module's install directory across hoisted node_modules levels
//! - Flattening the four dependency-category maps into ordered edges
//! - Finding the project root from the current working directory

mod config;
mod constants;
mod locate;
mod manifest;
mod types;

// Re-export public API
pub use config::find_project_root;
pub use constants::{EXCLUDED_DIRS, JS_TS_EXTENSIONS, MANIFEST_FILE, NODE_MODULES, SOURCE_EXTENSIONS};
pub use locate::{locate_module, module_dir};
pub use manifest::{ManifestError, ManifestRecord, read_manifest};
pub use types::{DepCategory, DependencyEdge, ModuleNotFound};
