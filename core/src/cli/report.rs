use crate::table::ResultTable;
use std::fmt;

/// Text preview of the full result table
///
/// Columns are left-aligned and padded to their widest cell, with a leading
/// zero-based row index.
pub struct TextReport<'a> {
    table: &'a ResultTable,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(table: &'a ResultTable) -> Self {
        Self { table }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = ResultTable::headers();
        let rows: Vec<Vec<String>> = self.table.rows().iter().map(|r| r.cells()).collect();

        let index_width = self.table.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                rows.iter()
                    .map(|cells| cells[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        writeln!(f, "DICOM Metadata")?;
        writeln!(f, "==============")?;
        writeln!(f)?;

        write!(f, "{:width$}", "", width = index_width)?;
        for (header, width) in headers.iter().zip(&widths) {
            write!(f, "  {:<width$}", header, width = *width)?;
        }
        writeln!(f)?;

        for (index, cells) in rows.iter().enumerate() {
            write!(f, "{:>width$}", index, width = index_width)?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, "  {:<width$}", cell, width = *width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{extract_attributes, IntensityMetric};
    use crate::table::{ResultRow, ResultTableBuilder};
    use crate::testutil::DatasetBuilder;
    use std::path::PathBuf;

    #[test]
    fn test_text_report_format() {
        let mut builder = ResultTableBuilder::new();
        let dcm = DatasetBuilder::new()
            .patient_name("DOE^JOHN")
            .modality("MR")
            .into_file_object();
        builder.push(ResultRow::new(
            PathBuf::from("a.dcm"),
            extract_attributes(&dcm),
            IntensityMetric::Value(42.5),
        ));
        let table = builder.build();

        let output = format!("{}", TextReport::new(&table));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "DICOM Metadata");
        assert!(lines[3].contains("Patient Name"));
        assert!(lines[3].trim_end().ends_with("Average Intensity"));
        assert!(lines[4].starts_with("0  N/A"));
        assert!(lines[4].contains("DOE^JOHN"));
        assert!(lines[4].contains("MR"));
        assert!(lines[4].trim_end().ends_with("42.5"));
        assert_eq!(lines.len(), 5);
        assert!(!output.contains("Total rows"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let mut builder = ResultTableBuilder::new();
        for name in ["A", "A_MUCH_LONGER_PATIENT_NAME"] {
            let dcm = DatasetBuilder::new().patient_name(name).into_file_object();
            builder.push(ResultRow::new(
                PathBuf::from("x.dcm"),
                extract_attributes(&dcm),
                IntensityMetric::NotApplicable,
            ));
        }
        let table = builder.build();

        let output = TextReport::new(&table).to_string();
        let lines: Vec<&str> = output.lines().skip(3).take(3).collect();
        let column = lines[0].find("Study Instance UID").unwrap();
        assert_eq!(&lines[1][column..column + 3], "N/A");
        assert_eq!(&lines[2][column..column + 3], "N/A");
    }
}
