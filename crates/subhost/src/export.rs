//! CSV report output.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use subhost_core::{ResultRecord, Result, CSV_HEADER};
use tracing::{debug, info};

/// Write the header and one row per record to `writer`.
///
/// The header is written even when there are no records.
pub fn write_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `output_path` and write the report to it.
pub fn export_csv(records: &[ResultRecord], output_path: &Path) -> Result<()> {
    debug!("Exporting {} records to CSV: {}", records.len(), output_path.display());

    let file = File::create(output_path)?;
    write_csv(records, file)?;

    info!("Exported {} records to CSV: {}", records.len(), output_path.display());
    Ok(())
}

/// Read a report back, for checks and tests.
pub fn read_csv(path: &Path) -> Result<Vec<ResultRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let records = rdr.deserialize().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}
