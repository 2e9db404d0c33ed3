use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "depwhy")]
#[command(about = "Explain why a module is installed, what it weighs, and where it is used", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Explain how a module reached the install tree
    Why(WhyArgs),
    /// Break down a module's installed footprint
    Size(SizeArgs),
}

#[derive(Debug, Args)]
struct WhyArgs {
    #[command(flatten)]
    cfg: depwhy_explain::Config,

    /// Also compute the transitive size breakdown
    #[arg(long)]
    size: bool,

    /// Also scan project sources for usages
    #[arg(long)]
    usages: bool,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct SizeArgs {
    #[command(flatten)]
    cfg: depwhy_size::Config,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Why(args) => run_why(args, &mut stdout, start),
        Commands::Size(args) => run_size(args, &mut stdout, start),
    }
}

fn run_why<W: Write>(args: WhyArgs, stdout: &mut W, start: Instant) -> Result<()> {
    info!("Running why for '{}'", args.cfg.module);
    debug!("Config: {:?}", args.cfg);

    let report = match depwhy_explain::run_explain(args.cfg) {
        Ok(report) => report,
        Err(e) => {
            // The one user-facing failure: the target has no manifest
            // anywhere. Everything else degrades to partial results upstream.
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    let size_report = if args.size {
        Some(depwhy_size::measure_transitive(&report.module, &report.root)?)
    } else {
        None
    };
    let usages = if args.usages {
        Some(depwhy_usage::find_usages(&report.module, &report.root)?)
    } else {
        None
    };

    if args.json {
        let doc = serde_json::json!({
            "why": report,
            "size": size_report,
            "usages": usages,
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&doc)?)?;
        stdout.flush()?;
        return Ok(());
    }

    depwhy_explain::print_explain_report(stdout, &report)?;

    if let Some(size_report) = &size_report {
        writeln!(stdout)?;
        depwhy_size::print_size_report(stdout, size_report)?;
    }
    if let Some(usages) = &usages {
        writeln!(stdout)?;
        depwhy_usage::print_usages(stdout, &report.module, usages)?;
    }

    print_epilogue(stdout, start)?;
    Ok(())
}

fn run_size<W: Write>(args: SizeArgs, stdout: &mut W, start: Instant) -> Result<()> {
    info!("Running size for '{}'", args.cfg.module);
    debug!("Config: {:?}", args.cfg);

    let report = match depwhy_size::run_size_report(args.cfg) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        stdout.flush()?;
        return Ok(());
    }

    depwhy_size::print_size_report(stdout, &report)?;
    print_epilogue(stdout, start)?;
    Ok(())
}

fn print_epilogue<W: Write>(stdout: &mut W, start: Instant) -> Result<()> {
    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "\n{} Finished in {}ms.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan()
    )?;
    stdout.flush()?;
    Ok(())
}
