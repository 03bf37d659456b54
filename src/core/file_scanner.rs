use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Trailing path segments every string resource file must have.
pub const RESOURCE_PATH_SUFFIX: [&str; 3] = ["res", "values", "strings.xml"];

/// Result of scanning for resource files.
#[derive(Debug, Default)]
pub struct ScanFilesResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Walk `base_dir` and collect every `res/values/strings.xml` below it.
///
/// Entries are visited in file-name order so repeated runs see the same
/// sequence. A missing root is not an error: the walk simply yields nothing.
///
/// Ignore entries without wildcards are directories relative to `base_dir`
/// and exclude everything below them. Glob entries are matched against both
/// the full path and the path relative to `base_dir`.
pub fn scan_resource_files(
    base_dir: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanFilesResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            let path = base_dir.join(p);
            if verbose && !path.exists() {
                eprintln!(
                    "{} Ignore path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            literal_ignore_paths.push(path);
        }
    }

    if !base_dir.exists() {
        if verbose {
            eprintln!(
                "{} Root directory does not exist: {}",
                "warning:".bold().yellow(),
                base_dir.display()
            );
        }
        return ScanFilesResult::default();
    }

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() || !is_resource_file(path) {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if matches_any_glob(&glob_patterns, path, base_dir) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    ScanFilesResult {
        files,
        skipped_count,
    }
}

fn matches_any_glob(patterns: &[Pattern], path: &Path, base_dir: &Path) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let full = path.to_string_lossy();
    let relative = path
        .strip_prefix(base_dir)
        .map(|p| p.to_string_lossy())
        .unwrap_or_else(|_| full.clone());
    patterns
        .iter()
        .any(|p| p.matches(&full) || p.matches(&relative))
}

/// Check whether a path ends with `res/values/strings.xml`.
pub fn is_resource_file(path: &Path) -> bool {
    let tail: Vec<_> = path
        .components()
        .rev()
        .take(RESOURCE_PATH_SUFFIX.len())
        .map(|c| c.as_os_str())
        .collect();

    tail.len() == RESOURCE_PATH_SUFFIX.len()
        && tail
            .iter()
            .zip(RESOURCE_PATH_SUFFIX.iter().rev())
            .all(|(segment, expected)| *segment == *expected)
}
