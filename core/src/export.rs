//! CSV export of the result table

use crate::error::Result;
use crate::table::ResultTable;
use log::{info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "resultados_dicom";

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "metadata_dicom_results.csv";

/// Writes the table as CSV: a header row, then one record per row
///
/// Fields containing delimiters, quotes or newlines are quoted.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(ResultTable::headers())?;
    for row in table.rows() {
        csv.write_record(row.cells())?;
    }
    csv.flush()?;
    Ok(())
}

/// Creates `dir`, falling back to the working directory if that fails
pub fn ensure_output_dir(dir: &Path) -> PathBuf {
    match fs::create_dir_all(dir) {
        Ok(()) => {
            info!("Output directory ready: {}", dir.display());
            dir.to_path_buf()
        }
        Err(e) => {
            warn!(
                "Failed to create output directory {}: {}; writing to current directory",
                dir.display(),
                e
            );
            PathBuf::from(".")
        }
    }
}

/// Exports the table to `<dir>/<file_name>` and returns the written path
///
/// Directory creation failures are recovered from; write failures are not.
pub fn export_table(table: &ResultTable, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let output_path = ensure_output_dir(dir).join(file_name);
    let file = fs::File::create(&output_path)?;
    write_csv(table, file)?;
    info!("Saved {} rows to {}", table.len(), output_path.display());
    Ok(output_path)
}
