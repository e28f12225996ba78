pub mod error;
pub mod index;
pub mod manifest;
pub mod markup;
pub mod model;
pub mod resolve;
pub mod source;

use std::path::Path;

use tracing::info;

use error::IndexError;
use model::IndexRecord;
use source::{DirectorySource, DocumentSource};

/// Directory scanned when none is given.
pub const DEFAULT_INPUT_DIR: &str = "reports";
/// Manifest written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "index.json";
/// Prefix joined with each filename to form the record URL.
pub const DEFAULT_URL_PREFIX: &str = "reports/";

/// Main API entry point: index every document a source supplies.
///
/// Extraction never fails per document; only the source itself can error.
pub fn build_index_from_source(
    source: &dyn DocumentSource,
    url_prefix: &str,
) -> Result<Vec<IndexRecord>, IndexError> {
    let documents = source.documents()?;
    info!(
        backend = source.backend_name(),
        documents = documents.len(),
        "building report index"
    );
    Ok(index::build_index(&documents, url_prefix))
}

/// Index the `*.html` files of `input_dir` and write the manifest to `output`.
///
/// Returns the records written.
pub fn index_directory(
    input_dir: &Path,
    output: &Path,
    url_prefix: &str,
) -> Result<Vec<IndexRecord>, IndexError> {
    let source = DirectorySource::new(input_dir);
    let records = build_index_from_source(&source, url_prefix)?;
    manifest::write_manifest(output, &records)?;
    info!(
        output = %output.display(),
        entries = records.len(),
        "wrote report manifest"
    );
    Ok(records)
}
