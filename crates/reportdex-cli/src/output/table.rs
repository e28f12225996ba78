use reportdex_core::index::IndexedDocument;

pub fn print(indexed: &IndexedDocument) {
    print!("{}", format_indexed(indexed));
}

pub fn format_indexed(indexed: &IndexedDocument) -> String {
    let record = &indexed.record;
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n\n", indexed.filename));
    out.push_str(&format!(
        "  {:<8}{}  [{}]\n",
        "Name:", record.name, indexed.name_source
    ));
    out.push_str(&format!("  {:<8}{}\n", "URL:", record.url));

    let month = match (record.month, record.month_name.as_deref()) {
        (Some(n), Some(label)) => format!("{label} ({n})"),
        _ => "-".to_string(),
    };
    let year = record
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!(
        "  {:<8}{}  [{}]\n",
        "Month:", month, indexed.period_source
    ));
    out.push_str(&format!("  {:<8}{}\n", "Year:", year));

    out
}
