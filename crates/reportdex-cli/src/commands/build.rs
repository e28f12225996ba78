use std::path::Path;

use reportdex_core::error::IndexError;

pub fn run(input_dir: &Path, output_file: &Path, url_prefix: &str) -> Result<(), IndexError> {
    let records = reportdex_core::index_directory(input_dir, output_file, url_prefix)?;

    println!(
        "Wrote {} with {} entries",
        output_file.display(),
        records.len()
    );

    let undated = records.iter().filter(|r| r.month.is_none()).count();
    if undated > 0 {
        eprintln!("  {undated} report(s) without a recognizable month");
    }

    Ok(())
}
