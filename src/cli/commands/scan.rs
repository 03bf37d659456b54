use std::{
    env,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::{ScanArgs, ScanCommand},
    exit_status::ExitStatus,
    report::{ReportOptions, print_parse_failures, report_to},
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config, load_config_file},
    core::{ScanResult, scan as scan_root},
    rules::{ClassifyOptions, classify},
};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let verbose = cmd.args.verbose;
    let config = resolve_config(cmd.root.as_deref(), &cmd.args)?;

    let mut stdout = io::stdout().lock();
    run_analysis(&config, verbose, &mut stdout)?;
    stdout.flush().context("Failed to write report")?;

    Ok(ExitStatus::Success)
}

/// Run the whole pipeline for `config` and write the report to `writer`.
///
/// Parse failures are printed to stderr ahead of the report and returned in
/// [`ScanResult::failures`].
pub fn run_analysis<W: Write>(config: &Config, verbose: bool, writer: &mut W) -> Result<ScanResult> {
    let result = scan_root(Path::new(&config.root_path), &config.ignores, verbose);
    print_parse_failures(&result.failures);

    let duplicates = classify(&result.index, &ClassifyOptions::from(config));
    report_to(&result, &duplicates, &ReportOptions::from(config), writer)
        .context("Failed to write report")?;

    Ok(result)
}

/// Load the config file (explicit or discovered) and apply command-line overrides.
pub fn resolve_config(root: Option<&Path>, args: &ScanArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            let loaded = load_config(&cwd)?;
            if args.verbose && loaded.from_file {
                eprintln!("{} Loaded {}", "info:".bold().blue(), CONFIG_FILE_NAME);
            }
            loaded.config
        }
    };

    if let Some(root) = root {
        config.root_path = root.to_string_lossy().into_owned();
    }
    if let Some(len) = args.min_value_length {
        config.min_value_length = len;
    }
    if let Some(max) = args.max_displayed_value_dups {
        config.max_displayed_value_dups = max;
    }
    if let Some(max) = args.max_occurrences_for_display {
        config.max_occurrences_for_display = max;
    }
    if !args.pref_markers.is_empty() {
        config.pref_markers = args.pref_markers.clone();
    }
    if !args.value_stoplist.is_empty() {
        config.value_stoplist = args.value_stoplist.clone();
    }

    Ok(config)
}
