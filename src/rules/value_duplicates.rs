//! Same-value detection rule.
//!
//! Finds text that is defined under several different names and could be
//! served by a single resource. Short values and common UI labels are skipped.

use std::collections::HashSet;

use super::{ClassifyOptions, ValueDuplicate};
use crate::core::ValueIndex;

/// Values shared by at least two distinct names.
///
/// Sorted by occurrence count, most widespread first. Ties keep index order.
pub fn check_value_duplicates<'a>(
    by_value: &'a ValueIndex,
    options: &ClassifyOptions,
) -> Vec<ValueDuplicate<'a>> {
    let mut duplicates: Vec<ValueDuplicate> = by_value
        .iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .filter(|(value, _)| is_actionable_value(value, options))
        .filter(|(_, occurrences)| {
            let distinct: HashSet<&str> = occurrences.iter().map(|o| o.name.as_str()).collect();
            distinct.len() > 1
        })
        .map(|(value, occurrences)| ValueDuplicate { value, occurrences })
        .collect();

    duplicates.sort_by(|a, b| b.occurrences.len().cmp(&a.occurrences.len()));
    duplicates
}

/// Long enough to matter and not one of the stoplisted labels.
pub fn is_actionable_value(value: &str, options: &ClassifyOptions) -> bool {
    if value.chars().count() <= options.min_value_length {
        return false;
    }
    let lowered = value.to_lowercase();
    !options.value_stoplist.iter().any(|stop| *stop == lowered)
}
