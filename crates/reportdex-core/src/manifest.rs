use std::io::Write;
use std::path::Path;

use crate::error::IndexError;
use crate::model::IndexRecord;

/// Encode records as a pretty-printed JSON array (2-space indent,
/// non-ASCII written as-is).
pub fn to_json(records: &[IndexRecord]) -> Result<String, IndexError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the manifest, replacing any existing file at `path`.
///
/// The JSON goes to a temp file next to `path` first and is renamed into
/// place, so readers never see a half-written manifest.
pub fn write_manifest(path: &Path, records: &[IndexRecord]) -> Result<(), IndexError> {
    let write_err = |reason: String| IndexError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let json = to_json(records)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmpfile = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    tmpfile
        .write_all(json.as_bytes())
        .map_err(|e| write_err(e.to_string()))?;
    tmpfile
        .persist(path)
        .map_err(|e| write_err(e.error.to_string()))?;

    Ok(())
}

/// Load a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<Vec<IndexRecord>, IndexError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Month, Period, PeriodSource};

    fn record(name: &str, month: Option<Month>, year: Option<i32>) -> IndexRecord {
        let period = Period {
            month,
            year,
            source: PeriodSource::VisibleText,
        };
        IndexRecord::new(name.into(), format!("reports/{name}.html"), &period)
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&[record("Иванов", Some(Month::July), Some(2025))]).unwrap();
        let expected = r#"[
  {
    "name": "Иванов",
    "url": "reports/Иванов.html",
    "month": 7,
    "month_name": "Июль",
    "year": 2025
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_absent_fields_are_null() {
        let json = to_json(&[record("x", None, Some(2024))]).unwrap();
        assert!(json.contains("\"month\": null"));
        assert!(json.contains("\"month_name\": null"));
        assert!(json.contains("\"year\": 2024"));
        assert!(!json.contains("\"null\""));
    }

    #[test]
    fn test_empty_manifest() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "stale content that is much longer than the new one").unwrap();

        let records = vec![record("a", Some(Month::March), None)];
        write_manifest(&path, &records).unwrap();

        assert_eq!(read_manifest(&path).unwrap(), records);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.json");
        let err = write_manifest(&path, &[]).unwrap_err();
        assert!(matches!(err, IndexError::Write { .. }));
    }
}
