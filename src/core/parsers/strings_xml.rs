//! Parser for Android `strings.xml` resource files.
//!
//! Only `<string>` elements directly under the document root are read. Nested
//! markup inside a value (`<b>`, `<xliff:g>`, CDATA sections) is flattened to
//! its text content.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use roxmltree::{Document, Node};

const STRING_ELEMENT: &str = "string";
const NAME_ATTRIBUTE: &str = "name";

/// Entries of one resource file, in document order.
///
/// A name defined twice keeps its first position and its last value.
pub type ResourceEntries = IndexMap<String, String>;

/// A successfully parsed resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResourceFile {
    pub path: PathBuf,
    pub entries: ResourceEntries,
}

/// A resource file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

pub fn parse_resource_file(path: &Path) -> Result<ParsedResourceFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file: {:?}", path))?;
    parse_resource_str(&content, path)
}

pub fn parse_resource_str(content: &str, path: &Path) -> Result<ParsedResourceFile> {
    let document = Document::parse(content)
        .with_context(|| format!("Failed to parse resource file: {:?}", path))?;

    let mut entries = ResourceEntries::new();
    for element in document
        .root_element()
        .children()
        .filter(|n| n.has_tag_name(STRING_ELEMENT))
    {
        let Some(name) = element.attribute(NAME_ATTRIBUTE).filter(|n| !n.is_empty()) else {
            continue;
        };
        let value = flatten_text(element);
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        entries.insert(name.to_string(), value.to_string());
    }

    Ok(ParsedResourceFile {
        path: path.to_path_buf(),
        entries,
    })
}

/// Concatenate every text node below `element`, dropping the markup around them.
fn flatten_text(element: Node) -> String {
    element
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
