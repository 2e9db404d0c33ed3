use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "why")]
#[command(about = "Explain how a module reached the install tree")]
pub struct Config {
    /// Module to explain (e.g. lodash or @babel/core)
    pub module: String,

    /// Root directory of the project (defaults to the nearest package.json)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Maximum chain length to traverse
    #[arg(long, default_value = "10")]
    pub max_depth: usize,
}
