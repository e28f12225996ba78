use reportdex_core::error::IndexError;
use reportdex_core::index::IndexedDocument;

pub fn print(indexed: &IndexedDocument) -> Result<(), IndexError> {
    let json = serde_json::to_string_pretty(indexed)?;
    println!("{json}");
    Ok(())
}
