//! Cross-file inverted indexes over parsed resource entries.

use indexmap::IndexMap;

use super::{module_label::module_label_for, parsers::strings_xml::ParsedResourceFile};

/// One appearance of a name, with the value it was defined with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOccurrence {
    pub module: String,
    pub value: String,
    pub file_path: String,
}

/// One appearance of a value, with the name it was defined under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOccurrence {
    pub module: String,
    pub name: String,
    pub file_path: String,
}

/// Entry name → every place it is defined, in scan order.
pub type NameIndex = IndexMap<String, Vec<NameOccurrence>>;

/// Entry value → every name it is defined under, in scan order.
pub type ValueIndex = IndexMap<String, Vec<ValueOccurrence>>;

#[derive(Debug, Default)]
pub struct ResourceIndex {
    pub by_name: NameIndex,
    pub by_value: ValueIndex,
    /// Number of (name, value) pairs indexed. Equal to the occurrence count of
    /// either index.
    pub total_entries: usize,
}

impl ResourceIndex {
    pub fn build<'a>(files: impl IntoIterator<Item = &'a ParsedResourceFile>) -> Self {
        let mut index = Self::default();
        for file in files {
            index.add_file(file);
        }
        index
    }

    pub fn add_file(&mut self, file: &ParsedResourceFile) {
        let module = module_label_for(&file.path);
        let file_path = file.path.to_string_lossy().into_owned();

        for (name, value) in &file.entries {
            self.by_name
                .entry(name.clone())
                .or_default()
                .push(NameOccurrence {
                    module: module.clone(),
                    value: value.clone(),
                    file_path: file_path.clone(),
                });
            self.by_value
                .entry(value.clone())
                .or_default()
                .push(ValueOccurrence {
                    module: module.clone(),
                    name: name.clone(),
                    file_path: file_path.clone(),
                });
            self.total_entries += 1;
        }
    }

    /// Number of distinct entry names seen across all files.
    pub fn distinct_names(&self) -> usize {
        self.by_name.len()
    }
}
