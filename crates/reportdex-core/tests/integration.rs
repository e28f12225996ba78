//! Integration tests for the build_index_from_source() pipeline.
//!
//! Uses a MemorySource holding pre-built documents so nothing touches the
//! file system, plus temp directories for the directory source and manifest.

use std::fs;

use reportdex_core::error::IndexError;
use reportdex_core::manifest::{read_manifest, to_json};
use reportdex_core::model::{IndexRecord, Month};
use reportdex_core::source::{Document, DocumentSource, MemorySource};
use reportdex_core::{build_index_from_source, index_directory, DEFAULT_URL_PREFIX};

struct FailingSource;

impl DocumentSource for FailingSource {
    fn documents(&self) -> Result<Vec<Document>, IndexError> {
        Err(IndexError::SourceUnavailable {
            path: "reports".into(),
            reason: "gone".into(),
        })
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn doc(filename: &str, html: &str) -> Document {
    Document::new(filename, html)
}

fn build(documents: Vec<Document>) -> Vec<IndexRecord> {
    build_index_from_source(&MemorySource::new(documents), DEFAULT_URL_PREFIX).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Title suffix + month word, and meta tag + filename fallback
// ---------------------------------------------------------------------------
#[test]
fn two_documents_end_to_end() {
    let records = build(vec![
        doc(
            "b.html",
            r#"<html><head><meta name="report-month" content="2025-07"></head>
               <body><p>Данные без заголовка</p></body></html>"#,
        ),
        doc(
            "a.html",
            "<html><head><title>Report: Smith John</title></head>\
             <body><p>Отчёт за март 2024 года</p></body></html>",
        ),
    ]);

    assert_eq!(
        records,
        vec![
            IndexRecord {
                name: "Smith John".into(),
                url: "reports/a.html".into(),
                month: Some(3),
                month_name: Some("Март".into()),
                year: Some(2024),
            },
            IndexRecord {
                name: "B".into(),
                url: "reports/b.html".into(),
                month: Some(7),
                month_name: Some("Июль".into()),
                year: Some(2025),
            },
        ]
    );
}

// ---------------------------------------------------------------------------
// Test 2: Meta tag is authoritative for every valid month
// ---------------------------------------------------------------------------
#[test]
fn meta_tag_overrides_visible_month_words() {
    for month in 1..=12u32 {
        let html = format!(
            r#"<meta name="report-month" content="2031-{month:02}">
               <h1>Итоги за январь 2020, февраль 2021</h1>"#
        );
        let records = build(vec![doc("r.html", &html)]);
        assert_eq!(records[0].month, Some(month));
        assert_eq!(records[0].year, Some(2031));
        assert_eq!(
            records[0].month_name.as_deref(),
            Some(Month::from_number(month).unwrap().label())
        );
    }
}

// ---------------------------------------------------------------------------
// Test 3: Heuristic month without a nearby year
// ---------------------------------------------------------------------------
#[test]
fn month_without_nearby_year() {
    let padding = "подробности ".repeat(10);
    let html = format!("<h1>Сводка</h1><p>за сентябрь {padding} опубликовано в 2025</p>");
    let records = build(vec![doc("s.html", &html)]);

    assert_eq!(records[0].name, "Сводка");
    assert_eq!(records[0].month, Some(9));
    assert_eq!(records[0].month_name.as_deref(), Some("Сентябрь"));
    assert_eq!(records[0].year, None);
}

// ---------------------------------------------------------------------------
// Test 4: Malformed markup degrades instead of failing
// ---------------------------------------------------------------------------
#[test]
fn malformed_documents_degrade() {
    let records = build(vec![
        doc("broken_markup.html", "<html><body><div class=\"x"),
        doc("only-text.html", "plain text, no tags, no month"),
        doc("script.html", "<script>var s = '<title>no</title>';</script><h1>Real</h1>"),
    ]);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Broken Markup");
    assert_eq!(records[0].month, None);
    assert_eq!(records[1].name, "Only Text");
    assert_eq!(records[2].name, "Real");
}

// ---------------------------------------------------------------------------
// Test 5: Source failures propagate
// ---------------------------------------------------------------------------
#[test]
fn source_failure_propagates() {
    let result = build_index_from_source(&FailingSource, DEFAULT_URL_PREFIX);
    assert!(matches!(result, Err(IndexError::SourceUnavailable { .. })));
}

// ---------------------------------------------------------------------------
// Test 6: Directory in, manifest out, and it parses back with null fields
// ---------------------------------------------------------------------------
#[test]
fn index_directory_writes_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let reports = dir.path().join("reports");
    fs::create_dir(&reports).unwrap();
    fs::write(
        reports.join("2025_07_ivanov.html"),
        "<title>Ежемесячный отчёт: Иванов Пётр</title><p>июль 2025</p>",
    )
    .unwrap();
    fs::write(reports.join("notes.html"), "<p>без даты</p>").unwrap();
    fs::write(reports.join("skip.txt"), "<title>nope</title>").unwrap();

    let output = dir.path().join("index.json");
    let written = index_directory(&reports, &output, DEFAULT_URL_PREFIX).unwrap();
    assert_eq!(written.len(), 2);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("\"name\": \"Иванов Пётр\""));
    assert!(text.contains("\"month_name\": null"));

    let parsed = read_manifest(&output).unwrap();
    assert_eq!(parsed, written);
    assert_eq!(parsed[0].url, "reports/2025_07_ivanov.html");
    assert_eq!(parsed[1].name, "Notes");
    assert_eq!(parsed[1].year, None);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert!(array[0]["month"].is_u64());
    assert!(array[0]["year"].is_i64());
    assert!(array[1]["month"].is_null());
}

// ---------------------------------------------------------------------------
// Test 7: Reruns with unchanged input produce identical output
// ---------------------------------------------------------------------------
#[test]
fn rerun_is_idempotent() {
    let documents = vec![
        doc("x.html", "<title>Отчёт – Петрова Мария</title><p>декабря 2023</p>"),
        doc("y.html", "<h1>Без месяца</h1>"),
    ];
    let first = to_json(&build(documents.clone())).unwrap();
    let second = to_json(&build(documents)).unwrap();
    assert_eq!(first, second);
}
