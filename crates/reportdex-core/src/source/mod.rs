pub mod directory;
pub mod memory;

use crate::error::IndexError;

pub use directory::DirectorySource;
pub use memory::MemorySource;

/// One report file: its file name and decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Document {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Decode raw file bytes as UTF-8, replacing invalid sequences with U+FFFD.
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Document {
            filename: filename.into(),
            content: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Trait for backends that supply report documents.
pub trait DocumentSource {
    /// All documents of this source, sorted by ascending filename.
    fn documents(&self) -> Result<Vec<Document>, IndexError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
