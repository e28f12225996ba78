use std::path::Path;

use reportdex_core::error::IndexError;
use reportdex_core::index::index_document;
use reportdex_core::source::Document;

use crate::output;

pub fn run(input_file: &Path, output_format: &str, url_prefix: &str) -> Result<(), IndexError> {
    let bytes = std::fs::read(input_file)?;
    let filename = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let doc = Document::from_bytes(filename, &bytes);
    let indexed = index_document(&doc, url_prefix);

    match output_format {
        "json" => output::json::print(&indexed)?,
        _ => output::table::print(&indexed),
    }

    Ok(())
}
