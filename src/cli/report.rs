//! Report formatting and printing utilities.
//!
//! Kept apart from the library so the catalog modules never print.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::catalog::{Locale, LocaleInfo};
use crate::check::CheckReport;
use crate::issues::{Issue, Severity};
use crate::scaffold::ScaffoldSummary;
use crate::writer::WrittenFile;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Completion line for one written namespace file.
pub fn print_written(file: &WrittenFile, verbose: bool) {
    print_written_to(file, verbose, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(file: &WrittenFile, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} {}",
            SUCCESS_MARK.green(),
            file.label(),
            format!("({} bytes)", file.bytes).dimmed()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), file.label());
    }
}

/// Closing line after a write run.
pub fn print_write_summary(files: usize, locales: usize, root: &Path) {
    print_write_summary_to(files, locales, root, &mut io::stdout().lock());
}

pub fn print_write_summary_to<W: Write>(files: usize, locales: usize, root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!(
            "Wrote {} {} for {} {} to {}",
            files,
            plural(files, "file", "files"),
            locales,
            plural(locales, "locale", "locales"),
            root.display()
        )
        .green()
    );
}

pub fn print_scaffold(summary: &ScaffoldSummary, verbose: bool) {
    print_scaffold_to(summary, verbose, &mut io::stdout().lock());
}

pub fn print_scaffold_to<W: Write>(summary: &ScaffoldSummary, verbose: bool, writer: &mut W) {
    for locale in &summary.locales {
        let _ = writeln!(
            writer,
            "{} {} ({} created, {} skipped)",
            SUCCESS_MARK.green(),
            locale.locale,
            locale.created.len(),
            locale.skipped.len()
        );
        if verbose {
            for skipped in &locale.skipped {
                let _ = writeln!(
                    writer,
                    "  {} {} {}",
                    "-".dimmed(),
                    skipped.path.display(),
                    "(already exists)".dimmed()
                );
            }
        }
    }

    let created = summary.created_count();
    let skipped = summary.skipped_count();
    let _ = writeln!(
        writer,
        "{}",
        format!(
            "Created {} {}, skipped {} {} (already exist)",
            created,
            plural(created, "file", "files"),
            skipped,
            plural(skipped, "file", "files")
        )
        .green()
    );
}

/// Print check findings in cargo style, followed by a summary line.
pub fn print_check(report: &CheckReport) {
    print_check_to(report, &mut io::stdout().lock());
}

pub fn print_check_to<W: Write>(report: &CheckReport, writer: &mut W) {
    if report.issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {}, {} {} - no issues found",
                report.locales_checked,
                plural(report.locales_checked, "locale", "locales"),
                report.files_checked,
                plural(report.files_checked, "file", "files")
            )
            .green()
        );
        return;
    }

    for issue in &report.issues {
        print_issue(issue, writer);
    }

    let errors = report
        .issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warnings = report.issues.len() - errors;
    let total = report.issues.len();
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {} ({} {}, {} {})",
            total,
            plural(total, "problem", "problems"),
            errors,
            plural(errors, "error", "errors"),
            warnings,
            plural(warnings, "warning", "warnings")
        )
        .bold()
    );
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        issue.message,
        issue.rule.to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.path.display());
    let _ = writeln!(writer);
}

/// Print the supported locale table.
pub fn print_locales(locales: &[LocaleInfo], base: &Locale) {
    print_locales_to(locales, base, &mut io::stdout().lock());
}

pub fn print_locales_to<W: Write>(locales: &[LocaleInfo], base: &Locale, writer: &mut W) {
    let code_width = column_width(locales.iter().map(|l| l.code), "CODE");
    let native_width = column_width(locales.iter().map(|l| l.native_name), "NATIVE");
    let name_width = column_width(locales.iter().map(|l| l.name), "NAME");

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{}  {}  {}",
            pad("CODE", code_width),
            pad("NATIVE", native_width),
            "NAME"
        )
        .bold()
    );
    for info in locales {
        let mut tags = Vec::new();
        if info.rtl {
            tags.push("rtl");
        }
        if info.code == base.as_str() {
            tags.push("base");
        }
        let name = if tags.is_empty() {
            info.name.to_string()
        } else {
            pad(info.name, name_width)
        };
        let line = format!(
            "{}  {}  {}",
            pad(info.code, code_width),
            pad(info.native_name, native_width),
            name
        );
        if tags.is_empty() {
            let _ = writeln!(writer, "{}", line);
        } else {
            let _ = writeln!(writer, "{}  {}", line, tags.join(", ").dimmed());
        }
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

/// Right-pad by display width, so CJK and combining marks line up.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
