//! Same-name detection rules.
//!
//! Every name defined in two or more files is either an exact duplicate (one
//! shared value) or a conflict (values differ). The two rules partition the
//! multiply-defined names.

use super::NameDuplicate;
use crate::core::{NameIndex, NameOccurrence};

/// Names defined more than once with one identical value everywhere.
///
/// Sorted by occurrence count, most widespread first. Ties keep index order.
pub fn check_exact_duplicates(by_name: &NameIndex) -> Vec<NameDuplicate<'_>> {
    let mut duplicates: Vec<NameDuplicate> = multiply_defined(by_name)
        .filter(|dup| all_values_identical(dup.occurrences))
        .collect();

    duplicates.sort_by(|a, b| b.occurrences.len().cmp(&a.occurrences.len()));
    duplicates
}

/// Names defined more than once with at least two different values.
///
/// Sorted by name.
pub fn check_conflicts(by_name: &NameIndex) -> Vec<NameDuplicate<'_>> {
    let mut conflicts: Vec<NameDuplicate> = multiply_defined(by_name)
        .filter(|dup| !all_values_identical(dup.occurrences))
        .collect();

    conflicts.sort_by(|a, b| a.name.cmp(b.name));
    conflicts
}

pub(super) fn multiply_defined(by_name: &NameIndex) -> impl Iterator<Item = NameDuplicate<'_>> {
    by_name
        .iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .map(|(name, occurrences)| NameDuplicate {
            name,
            occurrences,
        })
}

pub(super) fn all_values_identical(occurrences: &[NameOccurrence]) -> bool {
    match occurrences.split_first() {
        Some((first, rest)) => rest.iter().all(|o| o.value == first.value),
        None => true,
    }
}
