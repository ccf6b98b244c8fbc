use crate::error::Result;
use crate::types::ResolvedRecord;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serializes resolved rows as CSV: one header row, then one record per row.
/// Joined `types`/`location` strings stay single fields; the csv writer
/// quotes them as needed.
pub fn write_csv<W: Write>(rows: &[ResolvedRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Persists rows to a timestamped CSV file under `output_dir` and returns
/// the written path.
pub fn export_to_file(rows: &[ResolvedRecord], output_dir: &str) -> Result<String> {
    fs::create_dir_all(output_dir)?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("pokemon_data_{timestamp}.csv");
    let filepath = Path::new(output_dir).join(&filename);

    let file = fs::File::create(&filepath)?;
    write_csv(rows, file)?;

    info!("Exported {} rows to {}", rows.len(), filepath.display());
    Ok(filepath.to_string_lossy().to_string())
}
