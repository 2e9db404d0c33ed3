//! Dependency chain resolution for installed npm modules.
//!
//! This crate reconstructs every distinct path by which a target module
//! reached a project's install tree, by breadth-first traversal of the
//! package.json graph, and derives removal advice from the shape of the
//! resolved chains.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use depwhy_explain::{Config, run_explain};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     module: "lodash".to_string(),
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     max_depth: 10,
//! };
//!
//! let report = run_explain(cfg)?;
//! for chain in &report.chains {
//!     println!("{} ({})", chain.joined(), chain.category);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod reporter;
mod resolver;
mod runner;
mod suggest;
mod types;

// Re-export public API
pub use config::Config;
pub use reporter::print_explain_report;
pub use resolver::{dedupe_chains, resolve_chains};
pub use runner::run_explain;
pub use suggest::synthesize_suggestions;
pub use types::{DependencyChain, ExplainReport, Suggestion, SuggestionKind};
