use colored::{ColoredString, Colorize};
use log::debug;
use std::io::{self, Write};

use depwhy_core::DepCategory;

use crate::types::ExplainReport;

fn category_colored(category: DepCategory) -> ColoredString {
    match category {
        DepCategory::Production => category.label().green(),
        DepCategory::Development => category.label().yellow(),
        DepCategory::Peer => category.label().magenta(),
        DepCategory::Optional => category.label().blue(),
    }
}

pub fn print_explain_report<W: Write>(writer: &mut W, report: &ExplainReport) -> io::Result<()> {
    debug!("Printing explain report with {} chains", report.chains.len());

    let display_name = match &report.version {
        Some(v) => format!("{}@{}", report.module, v),
        None => report.module.clone(),
    };

    if report.chains.is_empty() {
        writeln!(
            writer,
            "{} {} is installed but no manifest in the tree declares it",
            "⚠".yellow().bold(),
            display_name.bright_white().bold()
        )?;
        writer.flush()?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} {} {}",
        "●".bright_blue(),
        display_name.bright_white().bold(),
        format!("({} chains)", report.chains.len()).dimmed()
    )?;

    for (idx, chain) in report.chains.iter().enumerate() {
        let is_last = idx == report.chains.len() - 1;
        let prefix = if is_last { "└──" } else { "├──" };

        let direct_marker = if chain.is_direct() { " direct".dimmed() } else { "".dimmed() };
        writeln!(
            writer,
            "{}  {} ({}){}",
            prefix.dimmed(),
            chain.joined(),
            category_colored(chain.category),
            direct_marker
        )?;
    }

    if !report.suggestions.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", "Suggestions".bold())?;
        for suggestion in &report.suggestions {
            writeln!(writer, "  {} {}", "•".yellow(), suggestion.message)?;
        }
    }

    print_summary(writer, report)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, report: &ExplainReport) -> io::Result<()> {
    let count = |category| report.chains.iter().filter(|c| c.category == category).count();
    let prod = count(DepCategory::Production);
    let dev = count(DepCategory::Development);
    let peer = count(DepCategory::Peer);
    let optional = count(DepCategory::Optional);

    writeln!(writer)?;
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Total chains: {}", report.chains.len().to_string().yellow().bold())?;

    let mut parts: Vec<String> = Vec::new();
    for (n, category) in [
        (prod, DepCategory::Production),
        (dev, DepCategory::Development),
        (peer, DepCategory::Peer),
        (optional, DepCategory::Optional),
    ] {
        if n > 0 {
            parts.push(format!("{n} {category}"));
        }
    }
    writeln!(writer, "  By category: {}", parts.join(", "))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DependencyChain;
    use std::path::PathBuf;

    fn sample_report() -> ExplainReport {
        ExplainReport {
            module: "x".to_string(),
            version: Some("1.0.0".to_string()),
            root: PathBuf::from("/project"),
            chains: vec![
                DependencyChain {
                    modules: vec!["x".to_string()],
                    category: DepCategory::Production,
                    declared_in: PathBuf::from("/project/package.json"),
                },
                DependencyChain {
                    modules: vec!["a".to_string(), "x".to_string()],
                    category: DepCategory::Development,
                    declared_in: PathBuf::from("/project/node_modules/a/package.json"),
                },
            ],
            suggestions: vec![],
        }
    }

    #[test]
    fn test_report_renders_chains() {
        colored::control::set_override(false);
        let mut out: Vec<u8> = Vec::new();
        print_explain_report(&mut out, &sample_report()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("x@1.0.0"));
        assert!(text.contains("a > x (dev)"));
        assert!(text.contains("x (prod) direct"));
        assert!(text.contains("Total chains: 2"));
    }

    #[test]
    fn test_report_empty_chains_note() {
        colored::control::set_override(false);
        let mut out: Vec<u8> = Vec::new();
        let mut report = sample_report();
        report.chains.clear();
        print_explain_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("no manifest in the tree declares it"));
    }
}
