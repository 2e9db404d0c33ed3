/// Directory installers place dependencies under.
pub const NODE_MODULES: &str = "node_modules";

/// Well-known manifest file name per module directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Extensions scanned for module usages in project code.
pub const JS_TS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

/// Extensions counted when estimating a module's shipped weight.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx", "json", "node"];

/// Directory names excluded from filtered size walks. Documentation, tests
/// and type declarations do not contribute to runtime weight.
pub const EXCLUDED_DIRS: &[&str] = &[
    "test",
    "tests",
    "__tests__",
    "doc",
    "docs",
    "example",
    "examples",
    "coverage",
    "types",
    "typings",
    ".github",
];
