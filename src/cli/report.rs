//! Report formatting and printing utilities.
//!
//! Renders a [`DuplicateReport`] as banner-delimited plain text. Kept apart
//! from the scanning and classification code so resdupe can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    config::Config,
    core::{ParseFailure, ScanResult},
    rules::{DuplicateReport, NameDuplicate, ValueDuplicate},
    utils::{pluralize, truncate_chars},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const BANNER_WIDTH: usize = 80;
const REPORT_TITLE: &str = "STRING RESOURCE DUPLICATE ANALYSIS";
const CONFLICT_PREVIEW_CHARS: usize = 100;
const PREVIEW_CHARS: usize = 80;

/// Display limits for the value duplicate section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only the first N value duplicates are considered for display.
    pub max_displayed_value_dups: usize,
    /// Value duplicates with more occurrences than this are counted but not shown.
    pub max_occurrences_for_display: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_displayed_value_dups: config.max_displayed_value_dups,
            max_occurrences_for_display: config.max_occurrences_for_display,
        }
    }
}

/// Print the full report to `writer`.
///
/// The scan command passes a locked stdout; tests pass a buffer.
pub fn report_to<W: Write>(
    scan: &ScanResult,
    duplicates: &DuplicateReport,
    options: &ReportOptions,
    writer: &mut W,
) -> io::Result<()> {
    print_banner(REPORT_TITLE, writer)?;
    writeln!(
        writer,
        "Found {} strings.xml {}",
        scan.files_scanned(),
        pluralize(scan.files_scanned(), "file", "files")
    )?;
    writeln!(writer)?;

    print_exact_duplicates(&duplicates.exact, writer)?;
    print_conflicts(&duplicates.conflicts, writer)?;
    print_value_duplicates(&duplicates.value_duplicates, options, writer)?;
    print_preference_duplicates(
        &duplicates.preference_duplicates,
        &duplicates.preference_conflicts,
        writer,
    )?;
    print_summary(scan, duplicates, writer)
}

/// Print one diagnostic line per file that could not be parsed.
pub fn print_parse_failures(failures: &[ParseFailure]) {
    print_parse_failures_to(failures, &mut io::stderr().lock());
}

/// Print parse failures to a custom writer.
pub fn print_parse_failures_to<W: Write>(failures: &[ParseFailure], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(
            writer,
            "{} failed to parse {}: {}",
            "error:".bold().red(),
            failure.file_path,
            failure.error
        );
    }
}

// ============================================================
// Sections
// ============================================================

fn print_banner<W: Write>(title: &str, writer: &mut W) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(writer, "{}", rule)?;
    writeln!(writer, "{}", title.bold())?;
    writeln!(writer, "{}", rule)?;
    writeln!(writer)
}

fn print_exact_duplicates<W: Write>(exact: &[NameDuplicate], writer: &mut W) -> io::Result<()> {
    print_banner(
        "HIGH PRIORITY: EXACT DUPLICATES (Same name, same value in multiple files)",
        writer,
    )?;

    for dup in exact {
        writeln!(writer, "String: {}", dup.name.cyan())?;
        if let Some(first) = dup.occurrences.first() {
            writeln!(writer, "Value: {}", first.value)?;
        }
        writeln!(writer, "Found in {} locations:", dup.occurrences.len())?;
        for occurrence in dup.occurrences {
            writeln!(writer, "  - {}", occurrence.file_path)?;
        }
        writeln!(
            writer,
            "Recommendation: Keep in ONE shared module, remove from others"
        )?;
        writeln!(writer)?;
    }

    writeln!(writer, "Total exact duplicates: {}", exact.len())?;
    writeln!(writer)
}

fn print_conflicts<W: Write>(conflicts: &[NameDuplicate], writer: &mut W) -> io::Result<()> {
    print_banner("HIGH PRIORITY: CONFLICTS (Same name, DIFFERENT values)", writer)?;

    for dup in conflicts {
        writeln!(writer, "String: {}", dup.name.cyan())?;
        writeln!(
            writer,
            "Found in {} locations with DIFFERENT values:",
            dup.occurrences.len()
        )?;
        for occurrence in dup.occurrences {
            writeln!(writer, "  - {}", occurrence.file_path)?;
            writeln!(
                writer,
                "    Value: {}",
                truncate_chars(&occurrence.value, CONFLICT_PREVIEW_CHARS)
            )?;
        }
        writeln!(
            writer,
            "Recommendation: Rename to make unique OR consolidate to single definition"
        )?;
        writeln!(writer)?;
    }

    writeln!(writer, "Total conflicts: {}", conflicts.len())?;
    writeln!(writer)
}

fn print_value_duplicates<W: Write>(
    value_dups: &[ValueDuplicate],
    options: &ReportOptions,
    writer: &mut W,
) -> io::Result<()> {
    print_banner(
        "MEDIUM PRIORITY: SAME VALUE, DIFFERENT NAMES (Potential consolidation)",
        writer,
    )?;

    let displayed = value_dups
        .iter()
        .take(options.max_displayed_value_dups)
        .filter(|dup| dup.occurrences.len() <= options.max_occurrences_for_display);

    for dup in displayed {
        writeln!(writer, "Value: {}", truncate_chars(dup.value, PREVIEW_CHARS))?;
        writeln!(
            writer,
            "Found with {} different names:",
            dup.occurrences.len()
        )?;
        for occurrence in dup.occurrences {
            writeln!(
                writer,
                "  - {} in {}",
                occurrence.name.cyan(),
                occurrence.file_path
            )?;
        }
        writeln!(writer, "Recommendation: Consider using single string resource")?;
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "Total value duplicates: {} (showing top {} with <={} instances)",
        value_dups.len(),
        options.max_displayed_value_dups,
        options.max_occurrences_for_display
    )?;
    writeln!(writer)
}

fn print_preference_duplicates<W: Write>(
    pref_dups: &[NameDuplicate],
    pref_conflicts: &[NameDuplicate],
    writer: &mut W,
) -> io::Result<()> {
    print_banner("PREFERENCE-RELATED STRING ANALYSIS", writer)?;

    writeln!(
        writer,
        "Found {} preference {} in multiple locations with identical values:",
        pref_dups.len(),
        pluralize(pref_dups.len(), "string", "strings")
    )?;
    writeln!(writer)?;

    for dup in pref_dups {
        writeln!(writer, "Pref: {}", dup.name.cyan())?;
        if let Some(first) = dup.occurrences.first() {
            writeln!(writer, "Value: {}", truncate_chars(&first.value, PREVIEW_CHARS))?;
        }
        writeln!(writer, "Locations:")?;
        for occurrence in dup.occurrences {
            writeln!(writer, "  - {}", occurrence.file_path)?;
        }
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "Found {} preference {} in multiple locations with DIFFERENT values:",
        pref_conflicts.len(),
        pluralize(pref_conflicts.len(), "string", "strings")
    )?;
    writeln!(writer)?;

    for dup in pref_conflicts {
        writeln!(writer, "Pref: {}", dup.name.cyan())?;
        writeln!(writer, "Locations:")?;
        for occurrence in dup.occurrences {
            writeln!(writer, "  - {}", occurrence.file_path)?;
            writeln!(
                writer,
                "    Value: {}",
                truncate_chars(&occurrence.value, PREVIEW_CHARS)
            )?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn print_summary<W: Write>(
    scan: &ScanResult,
    duplicates: &DuplicateReport,
    writer: &mut W,
) -> io::Result<()> {
    print_banner("SUMMARY STATISTICS", writer)?;

    writeln!(writer, "Total strings.xml files: {}", scan.files_scanned())?;
    writeln!(writer, "Files that failed to parse: {}", scan.failures.len())?;
    writeln!(
        writer,
        "Total unique string names: {}",
        scan.index.distinct_names()
    )?;
    writeln!(writer, "Total string entries: {}", scan.index.total_entries)?;
    writeln!(
        writer,
        "Exact duplicates (same name, same value): {}",
        duplicates.exact.len()
    )?;
    writeln!(
        writer,
        "Conflicts (same name, different value): {}",
        duplicates.conflicts.len()
    )?;
    writeln!(
        writer,
        "Value duplicates (same value, different names): {}",
        duplicates.value_duplicates.len()
    )?;
    writeln!(
        writer,
        "Preference duplicates: {}",
        duplicates.preference_duplicates.len()
    )?;
    writeln!(
        writer,
        "Preference conflicts: {}",
        duplicates.preference_conflicts.len()
    )?;
    writeln!(writer)
}
