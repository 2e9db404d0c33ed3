use colored::Colorize;
use log::debug;
use std::io::{self, Write};

use crate::types::ModuleUsage;

pub fn print_usages<W: Write>(writer: &mut W, module: &str, usages: &[ModuleUsage]) -> io::Result<()> {
    debug!("Printing usages for '{}' across {} files", module, usages.len());

    if usages.is_empty() {
        writeln!(
            writer,
            "{} No references to {} found in project sources",
            "⚠".yellow().bold(),
            module.bright_white().bold()
        )?;
        writer.flush()?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} {} {}",
        "●".bright_blue(),
        module.bright_white().bold(),
        format!("(referenced in {} files)", usages.len()).dimmed()
    )?;

    for (idx, usage) in usages.iter().enumerate() {
        let is_last = idx == usages.len() - 1;
        let prefix = if is_last { "└──" } else { "├──" };

        let lines = usage
            .lines
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        if usage.methods.is_empty() {
            writeln!(writer, "{}  {} {}", prefix.dimmed(), usage.file.blue(), format!("lines {lines}").dimmed())?;
        } else {
            writeln!(
                writer,
                "{}  {} {} calls {}",
                prefix.dimmed(),
                usage.file.blue(),
                format!("lines {lines}").dimmed(),
                usage.methods.join(", ").cyan()
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}
