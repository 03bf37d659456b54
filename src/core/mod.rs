//! Core scanning pipeline: discovery, parsing and indexing.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Finds `res/values/strings.xml` files under a root
//! - `parsers`: Turns one resource file into an ordered name → value map
//! - `module_label`: Maps a file path to the build module that owns it
//! - `index`: Inverted by-name and by-value indexes across all files
//! - `scan`: Runs the three phases above in order

pub mod file_scanner;
pub mod index;
pub mod module_label;
pub mod parsers;
pub mod scan;

pub use index::{NameIndex, NameOccurrence, ResourceIndex, ValueIndex, ValueOccurrence};
pub use parsers::strings_xml::{ParseFailure, ParsedResourceFile};
pub use scan::{ScanResult, scan};
