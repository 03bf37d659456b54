//! Preference string detection rules.
//!
//! Settings screens tend to copy their titles and summaries between modules.
//! These rules look only at names matching a preference naming convention.

use super::{
    ClassifyOptions, NameDuplicate,
    name_duplicates::{all_values_identical, multiply_defined},
};
use crate::core::NameIndex;

/// Preference names defined more than once with one identical value.
///
/// Sorted by name.
pub fn check_preference_duplicates<'a>(
    by_name: &'a NameIndex,
    options: &ClassifyOptions,
) -> Vec<NameDuplicate<'a>> {
    let mut duplicates: Vec<NameDuplicate> = multiply_defined(by_name)
        .filter(|dup| is_preference_name(dup.name, options))
        .filter(|dup| all_values_identical(dup.occurrences))
        .collect();

    duplicates.sort_by(|a, b| a.name.cmp(b.name));
    duplicates
}

/// Preference names defined more than once with differing values.
///
/// Sorted by name.
pub fn check_preference_conflicts<'a>(
    by_name: &'a NameIndex,
    options: &ClassifyOptions,
) -> Vec<NameDuplicate<'a>> {
    let mut conflicts: Vec<NameDuplicate> = multiply_defined(by_name)
        .filter(|dup| is_preference_name(dup.name, options))
        .filter(|dup| !all_values_identical(dup.occurrences))
        .collect();

    conflicts.sort_by(|a, b| a.name.cmp(b.name));
    conflicts
}

pub fn is_preference_name(name: &str, options: &ClassifyOptions) -> bool {
    let lowered = name.to_lowercase();
    options
        .pref_markers
        .iter()
        .any(|marker| lowered.contains(marker.as_str()))
}
