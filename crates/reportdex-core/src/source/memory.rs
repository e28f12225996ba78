use crate::error::IndexError;
use crate::source::{Document, DocumentSource};

/// Documents held in memory, for embedding and tests.
#[derive(Debug, Clone)]
pub struct MemorySource {
    documents: Vec<Document>,
}

impl MemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        MemorySource { documents }
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> Result<Vec<Document>, IndexError> {
        let mut docs = self.documents.clone();
        docs.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(docs)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_sorted_by_filename() {
        let source = MemorySource::new(vec![
            Document::new("b.html", ""),
            Document::new("a.html", ""),
        ]);
        let names: Vec<_> = source
            .documents()
            .unwrap()
            .into_iter()
            .map(|d| d.filename)
            .collect();
        assert_eq!(names, vec!["a.html", "b.html"]);
    }
}
