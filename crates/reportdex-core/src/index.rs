use serde::Serialize;
use tracing::debug;

use crate::markup::scan;
use crate::model::{IndexRecord, NameSource, PeriodSource};
use crate::resolve::name::collapse_whitespace;
use crate::resolve::{resolve_name, resolve_period};
use crate::source::Document;

/// A manifest record together with the rules that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedDocument {
    pub filename: String,
    #[serde(flatten)]
    pub record: IndexRecord,
    pub name_source: NameSource,
    pub period_source: PeriodSource,
}

/// Build manifest records for `documents`, ordered by ascending filename.
pub fn build_index(documents: &[Document], url_prefix: &str) -> Vec<IndexRecord> {
    let mut ordered: Vec<&Document> = documents.iter().collect();
    ordered.sort_by(|a, b| a.filename.cmp(&b.filename));

    ordered
        .into_iter()
        .map(|doc| index_document(doc, url_prefix).record)
        .collect()
}

/// Scan one document once and resolve its name and period.
///
/// Never fails: missing signals fall back to the filename-derived name and
/// null period fields.
pub fn index_document(doc: &Document, url_prefix: &str) -> IndexedDocument {
    let scanned = scan(&doc.content);
    let resolved = resolve_name(&scanned, &doc.filename);
    let period = resolve_period(&doc.content, &scanned);

    let name = collapse_whitespace(&resolved.name);
    debug!(
        file = %doc.filename,
        name = %name,
        name_source = %resolved.source,
        month = ?period.month.map(|m| m.number()),
        year = ?period.year,
        period_source = %period.source,
        "indexed report"
    );

    IndexedDocument {
        filename: doc.filename.clone(),
        record: IndexRecord::new(name, report_url(url_prefix, &doc.filename), &period),
        name_source: resolved.source,
        period_source: period.source,
    }
}

/// Join the URL prefix and a filename with exactly one `/` between them.
pub fn report_url(prefix: &str, filename: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{filename}")
    } else {
        format!("{prefix}/{filename}")
    }
}
