//! Module label derivation.
//!
//! A resource file belongs to the build module whose directory precedes the
//! first `src` segment of its path (`core/ui/src/main/res/values/strings.xml`
//! belongs to `core/ui`). Files outside a `src` tree fall back to their fourth
//! ancestor directory.

use std::path::{Component, MAIN_SEPARATOR_STR, Path};

const SOURCE_SEGMENT: &str = "src";
const FALLBACK_DEPTH: usize = 4;
const EMPTY_LABEL: &str = ".";

/// Derive a module label from path segments, file name included.
pub fn derive_module_label(segments: &[String]) -> String {
    let prefix = match segments.iter().position(|s| s == SOURCE_SEGMENT) {
        Some(idx) => &segments[..idx],
        None => &segments[..segments.len().saturating_sub(FALLBACK_DEPTH)],
    };

    let label = prefix.join(MAIN_SEPARATOR_STR);
    if label.is_empty() {
        EMPTY_LABEL.to_string()
    } else {
        label
    }
}

/// Split `path` into its segments and derive the module label.
///
/// The root of an absolute path becomes an empty leading segment so the
/// joined label keeps its leading separator.
pub fn module_label_for(path: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            // a drive prefix already anchors the label
            Component::RootDir if !segments.is_empty() => {}
            Component::RootDir => segments.push(String::new()),
            other => segments.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    derive_module_label(&segments)
}
