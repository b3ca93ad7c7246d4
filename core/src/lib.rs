pub mod cli;
pub mod decoder;
pub mod discovery;
pub mod error;
pub mod export;
pub mod extraction;
pub mod pipeline;
pub mod record;
pub mod table;

#[cfg(test)]
mod testutil;

pub use cli::report::TextReport;
pub use decoder::{DecoderAdapter, DicomDecoder, ParseOutcome, PixelOutcome};
pub use discovery::{Discoverer, Discovery, DiscoveryStats, Records};
pub use error::{DicomtabError, Result};
pub use export::{export_table, write_csv};
pub use extraction::{AttributeRecord, Field, IntensityMetric};
pub use pipeline::{Pipeline, RunOutcome, Stage};
pub use record::ParsedRecord;
pub use table::{ResultRow, ResultTable, ResultTableBuilder};
