//! Installed-footprint measurement for npm modules.
//!
//! This crate walks a module's install directory to estimate its shipped
//! weight, then walks the module's own dependency manifests to build a full
//! transitive size breakdown, counting every uniquely named module exactly
//! once the way a hoisting installer stores one copy on disk.

mod config;
mod reporter;
mod runner;
mod transitive;
mod types;
mod walk;

// Re-export public API
pub use config::Config;
pub use reporter::print_size_report;
pub use runner::run_size_report;
pub use transitive::measure_transitive;
pub use types::{SizeBreakdownEntry, SizeReport};
pub use walk::{dir_size, install_tree_size, source_size};
