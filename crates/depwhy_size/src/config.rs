use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "size")]
#[command(about = "Break down a module's installed footprint")]
pub struct Config {
    /// Module to measure (e.g. lodash or @babel/core)
    pub module: String,

    /// Root directory of the project (defaults to the nearest package.json)
    #[arg(long)]
    pub root: Option<PathBuf>,
}
