use crate::error::ExportError;
use crate::results::ResultSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of the export
pub const COLUMNS: [&str; 6] = ["Competitor", "NAME", "URL", "PART_NUMBER", "PRICE", "INVENTORY"];

/// Writes the header and one row per record; absent fields become empty cells
pub fn write_csv<W: Write>(writer: W, results: &ResultSet) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;

    for record in results {
        csv.write_record([
            record.competitor(),
            record.name(),
            record.url().unwrap_or(""),
            record.part_number().unwrap_or(""),
            record.price(),
            record.inventory(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the export to it
pub fn export_csv<P: AsRef<Path>>(path: P, results: &ResultSet) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    write_csv(file, results)?;
    ::log::info!(
        "Wrote {} records to {}",
        results.len(),
        path.as_ref().display()
    );
    Ok(())
}
