use colored::Colorize;
use log::debug;
use std::io::{self, Write};

use crate::types::SizeReport;

/// Render a byte count the way humans read install sizes.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 { format!("{bytes} B") } else { format!("{:.1} {}", value, UNITS[unit]) }
}

pub fn print_size_report<W: Write>(writer: &mut W, report: &SizeReport) -> io::Result<()> {
    debug!("Printing size report with {} entries", report.breakdown.len());

    writeln!(
        writer,
        "{} {} {}",
        "●".bright_blue(),
        report.module.bright_white().bold(),
        format!("({} total)", format_bytes(report.total_bytes)).dimmed()
    )?;

    for (idx, entry) in report.breakdown.iter().enumerate() {
        let is_last = idx == report.breakdown.len() - 1;
        let prefix = if is_last { "└──" } else { "├──" };
        let own_marker = if idx == 0 { " own".dimmed() } else { "".dimmed() };

        writeln!(
            writer,
            "{}  {} ({}){}",
            prefix.dimmed(),
            entry.name,
            format_bytes(entry.bytes).cyan(),
            own_marker
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Total size: {}", format_bytes(report.total_bytes).cyan().bold())?;
    writeln!(writer, "  Install tree: {}", format_bytes(report.install_tree_bytes).cyan())?;
    writeln!(
        writer,
        "  Share of install tree: {}",
        format!("{:.1}%", report.percent_of_install_tree).yellow().bold()
    )?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SizeBreakdownEntry;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_print_size_report() {
        colored::control::set_override(false);
        let report = SizeReport {
            module: "pkg".to_string(),
            own_bytes: 100,
            breakdown: vec![
                SizeBreakdownEntry { name: "pkg".to_string(), bytes: 100 },
                SizeBreakdownEntry { name: "dep".to_string(), bytes: 2048 },
            ],
            total_bytes: 2148,
            install_tree_bytes: 4296,
            percent_of_install_tree: 50.0,
        };

        let mut out: Vec<u8> = Vec::new();
        print_size_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("pkg (100 B) own"));
        assert!(text.contains("dep (2.0 KB)"));
        assert!(text.contains("Share of install tree: 50.0%"));
    }
}
