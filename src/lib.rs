//! Resdupe - duplicate string resource analyzer for multi-module Android projects
//!
//! Resdupe scans a source tree for `res/values/strings.xml` files and reports
//! string resources that are defined more than once: the same name in several
//! modules (with the same or conflicting values), the same text under several
//! names, and duplicated preference titles and summaries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, report rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, parsing and indexing of resource files
//! - `rules`: Duplicate classification over the indexes
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
pub mod utils;
