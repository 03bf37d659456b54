//! Duplicate classification rules.
//!
//! Each rule is a pure function over the indexes built by
//! [`crate::core::scan`]. Rules borrow from the indexes and never modify them.
//!
//! ## Module Structure
//!
//! - `name_duplicates`: Same name defined in several files (exact or conflicting)
//! - `value_duplicates`: Same text defined under several names
//! - `preference`: Same-name duplicates restricted to preference strings

pub mod name_duplicates;
pub mod preference;
pub mod value_duplicates;

use crate::{
    config::{Config, DEFAULT_PREF_MARKERS, DEFAULT_VALUE_STOPLIST},
    core::{NameOccurrence, ResourceIndex, ValueOccurrence},
};

pub use name_duplicates::{check_conflicts, check_exact_duplicates};
pub use preference::{check_preference_conflicts, check_preference_duplicates};
pub use value_duplicates::check_value_duplicates;

/// A name together with every place it is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameDuplicate<'a> {
    pub name: &'a str,
    pub occurrences: &'a [NameOccurrence],
}

/// A value together with every name it is defined under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDuplicate<'a> {
    pub value: &'a str,
    pub occurrences: &'a [ValueOccurrence],
}

/// Thresholds and tables the rules are parameterized by.
///
/// Markers and stoplist entries are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub pref_markers: Vec<String>,
    pub value_stoplist: Vec<String>,
    /// Values at most this many characters long are never value duplicates.
    pub min_value_length: usize,
}

impl ClassifyOptions {
    pub fn new(pref_markers: &[String], value_stoplist: &[String], min_value_length: usize) -> Self {
        Self {
            pref_markers: pref_markers.iter().map(|m| m.to_lowercase()).collect(),
            value_stoplist: value_stoplist.iter().map(|s| s.to_lowercase()).collect(),
            min_value_length,
        }
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            pref_markers: DEFAULT_PREF_MARKERS.iter().map(|s| s.to_string()).collect(),
            value_stoplist: DEFAULT_VALUE_STOPLIST.iter().map(|s| s.to_string()).collect(),
            min_value_length: 5,
        }
    }
}

impl From<&Config> for ClassifyOptions {
    fn from(config: &Config) -> Self {
        Self::new(
            &config.pref_markers,
            &config.value_stoplist,
            config.min_value_length,
        )
    }
}

/// All classifications of one scan.
#[derive(Debug, Default)]
pub struct DuplicateReport<'a> {
    pub exact: Vec<NameDuplicate<'a>>,
    pub conflicts: Vec<NameDuplicate<'a>>,
    pub value_duplicates: Vec<ValueDuplicate<'a>>,
    pub preference_duplicates: Vec<NameDuplicate<'a>>,
    pub preference_conflicts: Vec<NameDuplicate<'a>>,
}

pub fn classify<'a>(index: &'a ResourceIndex, options: &ClassifyOptions) -> DuplicateReport<'a> {
    DuplicateReport {
        exact: check_exact_duplicates(&index.by_name),
        conflicts: check_conflicts(&index.by_name),
        value_duplicates: check_value_duplicates(&index.by_value, options),
        preference_duplicates: check_preference_duplicates(&index.by_name, options),
        preference_conflicts: check_preference_conflicts(&index.by_name, options),
    }
}
