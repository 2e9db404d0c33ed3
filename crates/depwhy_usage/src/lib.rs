//! Heuristic usage scanning for installed npm modules.
//!
//! Finds where a project's own sources reference a module, by matching
//! require/import lines and follow-on method calls with regular expressions.
//! This is a text heuristic, not a structural analysis; matches are not
//! semantically verified.

mod patterns;
mod reporter;
mod scanner;
mod types;

// Re-export public API
pub use reporter::print_usages;
pub use scanner::find_usages;
pub use types::ModuleUsage;
