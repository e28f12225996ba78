use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::IndexError;
use crate::source::{Document, DocumentSource};

const REPORT_EXTENSION: &str = ".html";

/// Reads `*.html` files directly inside one directory (no recursion).
///
/// Dot-files count like any other name. Files that cannot be read are
/// logged and skipped rather than failing the whole run.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySource { dir: dir.into() }
    }

    fn report_paths(&self) -> Result<Vec<(String, PathBuf)>, IndexError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| IndexError::SourceUnavailable {
            path: self.dir.clone(),
            reason: e.to_string(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| IndexError::SourceUnavailable {
                path: self.dir.clone(),
                reason: e.to_string(),
            })?;
            let path = entry.path();

            let Some(filename) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %path.display(), "skipping file with non UTF-8 name");
                continue;
            };
            if !is_report_filename(&filename) {
                continue;
            }
            // follows symlinks
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            paths.push((filename, path));
        }

        paths.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(paths)
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Result<Vec<Document>, IndexError> {
        let mut docs = Vec::new();
        for (filename, path) in self.report_paths()? {
            match fs::read(&path) {
                Ok(bytes) => docs.push(Document::from_bytes(filename, &bytes)),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable report"),
            }
        }
        debug!(dir = %self.dir.display(), count = docs.len(), "loaded report documents");
        Ok(docs)
    }

    fn backend_name(&self) -> &str {
        "directory"
    }
}

fn is_report_filename(name: &str) -> bool {
    name.ends_with(REPORT_EXTENSION)
}
