use crate::extraction::{AttributeRecord, IntensityMetric, FIELDS};
use std::path::{Path, PathBuf};

/// Label of the derived metric column
pub const INTENSITY_LABEL: &str = "Average Intensity";

/// One output row: the attributes of a file plus its average intensity
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub source: PathBuf,
    pub attributes: AttributeRecord,
    pub intensity: IntensityMetric,
}

impl ResultRow {
    pub fn new(source: PathBuf, attributes: AttributeRecord, intensity: IntensityMetric) -> Self {
        Self {
            source,
            attributes,
            intensity,
        }
    }

    /// Path of the file the row was built from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Cell text in column order, matching [`ResultTable::headers`]
    pub fn cells(&self) -> Vec<String> {
        self.attributes
            .values()
            .map(str::to_string)
            .chain(std::iter::once(self.intensity.to_string()))
            .collect()
    }
}

/// Immutable, ordered result of one run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Column labels: the attribute fields followed by the intensity column
    pub fn headers() -> Vec<&'static str> {
        FIELDS
            .iter()
            .map(|f| f.label())
            .chain(std::iter::once(INTENSITY_LABEL))
            .collect()
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Accumulates rows until the table is handed off
#[derive(Debug, Default)]
pub struct ResultTableBuilder {
    rows: Vec<ResultRow>,
}

impl ResultTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(self) -> ResultTable {
        ResultTable { rows: self.rows }
    }
}
