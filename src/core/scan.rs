use std::path::{Path, PathBuf};

use colored::Colorize;

use super::{
    file_scanner::scan_resource_files,
    index::ResourceIndex,
    parsers::strings_xml::{ParseFailure, ParsedResourceFile, parse_resource_file},
};
use crate::utils::pluralize;

/// Everything the discovery, parse and index phases produced for one root.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every discovered resource file, parsed or not.
    pub files: Vec<PathBuf>,
    pub parsed: Vec<ParsedResourceFile>,
    pub failures: Vec<ParseFailure>,
    pub index: ResourceIndex,
    /// Paths the directory walk could not access.
    pub skipped_count: usize,
}

impl ScanResult {
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }
}

/// Discover, parse and index every resource file below `root`.
///
/// Never fails: unreadable or malformed files end up in
/// [`ScanResult::failures`] and contribute no entries.
pub fn scan(root: &Path, ignores: &[String], verbose: bool) -> ScanResult {
    let discovered = scan_resource_files(root, ignores, verbose);

    if verbose {
        eprintln!(
            "{} Found {} strings.xml {} under {}",
            "info:".bold().blue(),
            discovered.files.len(),
            pluralize(discovered.files.len(), "file", "files"),
            root.display()
        );
    }

    let mut parsed = Vec::with_capacity(discovered.files.len());
    let mut failures = Vec::new();

    for path in &discovered.files {
        match parse_resource_file(path) {
            Ok(file) => parsed.push(file),
            Err(e) => failures.push(ParseFailure {
                file_path: path.to_string_lossy().into_owned(),
                error: format!("{:#}", e),
            }),
        }
    }

    let index = ResourceIndex::build(&parsed);

    ScanResult {
        files: discovered.files,
        parsed,
        failures,
        index,
        skipped_count: discovered.skipped_count,
    }
}
