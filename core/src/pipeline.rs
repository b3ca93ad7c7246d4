use crate::decoder::{DecoderAdapter, DicomDecoder};
use crate::discovery::Discoverer;
use crate::extraction::{analyze_intensity, extract_attributes};
use crate::record::ParsedRecord;
use crate::table::{ResultRow, ResultTable, ResultTableBuilder};
use log::{debug, info};
use std::fmt;
use std::path::Path;

/// Stage of a pipeline run
///
/// A run moves forward only: `Idle → Discovering → Extracting → Assembled`,
/// or `Idle → Discovering → Empty` when nothing valid was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Discovering,
    Extracting,
    Assembled,
    Empty,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Discovering => "discovering",
            Stage::Extracting => "extracting",
            Stage::Assembled => "assembled",
            Stage::Empty => "empty",
        };
        write!(f, "{}", name)
    }
}

/// Terminal result of a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// At least one valid file was processed
    Assembled(ResultTable),
    /// No valid file was found; nothing should be exported
    Empty,
}

impl RunOutcome {
    pub fn table(&self) -> Option<&ResultTable> {
        match self {
            RunOutcome::Assembled(table) => Some(table),
            RunOutcome::Empty => None,
        }
    }

    pub fn into_table(self) -> Option<ResultTable> {
        match self {
            RunOutcome::Assembled(table) => Some(table),
            RunOutcome::Empty => None,
        }
    }
}

/// Sequences discovery, attribute extraction and intensity analysis
///
/// # Example
///
/// ```no_run
/// use dicomtab_core::{Pipeline, RunOutcome};
/// use std::path::Path;
///
/// match Pipeline::new().run(Path::new("/data/dicom")) {
///     RunOutcome::Assembled(table) => println!("{} rows", table.len()),
///     RunOutcome::Empty => println!("nothing found"),
/// }
/// ```
pub struct Pipeline<D: DecoderAdapter = DicomDecoder> {
    decoder: D,
    stage: Stage,
}

impl Pipeline<DicomDecoder> {
    pub fn new() -> Self {
        Self::with_decoder(DicomDecoder)
    }
}

impl Default for Pipeline<DicomDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DecoderAdapter> Pipeline<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            stage: Stage::Idle,
        }
    }

    /// Stage reached by the most recent run
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Processes every valid file under `root`, one row per file
    ///
    /// Files are handled strictly one at a time: a record is parsed,
    /// extracted, analysed and dropped before the next file is parsed.
    pub fn run(&mut self, root: &Path) -> RunOutcome {
        let Self { decoder, stage } = self;
        *stage = Stage::Idle;
        advance(stage, Stage::Discovering);
        let mut records = Discoverer::new(&*decoder).records(root);

        let first = match records.next() {
            Some(record) => record,
            None => {
                advance(stage, Stage::Empty);
                info!("No valid DICOM files found to process");
                return RunOutcome::Empty;
            }
        };

        advance(stage, Stage::Extracting);
        let mut builder = ResultTableBuilder::new();
        for record in std::iter::once(first).chain(records.by_ref()) {
            builder.push(build_row(&*decoder, record));
        }

        let stats = records.stats();
        debug!(
            "Discovery stats: {} scanned, {} failed, {} without PatientName",
            stats.scanned, stats.failures, stats.rejected
        );

        let table = builder.build();
        advance(stage, Stage::Assembled);
        info!("Result table assembled with {} rows", table.len());
        RunOutcome::Assembled(table)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!("Pipeline stage: {} -> {}", stage, next);
    *stage = next;
}

/// Builds the row for one record, consuming it
fn build_row<D: DecoderAdapter + ?Sized>(decoder: &D, record: ParsedRecord) -> ResultRow {
    let attributes = extract_attributes(record.object());
    let intensity = analyze_intensity(decoder, &record);
    ResultRow::new(record.path().to_path_buf(), attributes, intensity)
}
