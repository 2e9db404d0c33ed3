use serde::Serialize;

/// References to a module found in one project source file.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleUsage {
    /// Path relative to the project root.
    pub file: String,
    /// Line numbers of import statements and method calls, ascending.
    pub lines: Vec<usize>,
    /// Method names invoked on identifiers bound to the module.
    pub methods: Vec<String>,
    /// The first matching import line, trimmed.
    pub context: Option<String>,
}
