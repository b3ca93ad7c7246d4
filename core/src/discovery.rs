//! Recursive discovery of valid DICOM files
//!
//! The tree is walked depth-first with entries sorted by file name, so two
//! runs over an unchanged directory visit files in the same order.

use crate::decoder::{DecoderAdapter, ParseOutcome};
use crate::record::ParsedRecord;
use log::{debug, info, warn};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Counters for one walk over a directory tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Regular files visited
    pub scanned: usize,
    /// Records that decoded and carry a PatientName
    pub found: usize,
    /// DICOM files that could not be decoded
    pub failures: usize,
    /// Decoded files excluded for lacking a PatientName
    pub rejected: usize,
}

/// Valid records found under a directory, in visiting order
///
/// Holds every record at once; prefer [`Discoverer::records`] when the
/// records are processed one at a time.
#[derive(Debug, Default)]
pub struct Discovery {
    pub records: Vec<ParsedRecord>,
    pub stats: DiscoveryStats,
}

impl Discovery {
    /// Number of valid records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Walks a directory tree and keeps the files that are valid instances
pub struct Discoverer<'a, D: DecoderAdapter + ?Sized> {
    decoder: &'a D,
}

impl<'a, D: DecoderAdapter + ?Sized> Discoverer<'a, D> {
    pub fn new(decoder: &'a D) -> Self {
        Self { decoder }
    }

    /// Lazily yields the valid records under `root`
    ///
    /// A file is only parsed when the next record is requested, so at most
    /// one decoded record is alive if the caller drops each before advancing.
    pub fn records(&self, root: &Path) -> Records<'a, D> {
        info!("Scanning directory: {}", root.display());
        Records {
            decoder: self.decoder,
            walker: WalkDir::new(root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
            stats: DiscoveryStats::default(),
            finished: false,
        }
    }

    /// Collects every valid record under `root`
    pub fn discover(&self, root: &Path) -> Discovery {
        let mut records = self.records(root);
        let collected: Vec<ParsedRecord> = records.by_ref().collect();
        Discovery {
            records: collected,
            stats: records.stats(),
        }
    }
}

/// Iterator over the valid records of a directory tree
///
/// Non-DICOM files are skipped silently. Decode failures are logged and
/// skipped; they never abort the walk and are never retried.
pub struct Records<'a, D: DecoderAdapter + ?Sized> {
    decoder: &'a D,
    walker: walkdir::IntoIter,
    stats: DiscoveryStats,
    finished: bool,
}

impl<'a, D: DecoderAdapter + ?Sized> Records<'a, D> {
    /// Counters accumulated so far; final once the iterator is exhausted
    pub fn stats(&self) -> DiscoveryStats {
        self.stats
    }
}

impl<'a, D: DecoderAdapter + ?Sized> Iterator for Records<'a, D> {
    type Item = ParsedRecord;

    fn next(&mut self) -> Option<ParsedRecord> {
        if self.finished {
            return None;
        }

        for entry in self.walker.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error accessing entry: {}", e);
                    continue;
                }
            };
            if !is_regular_file(&entry) {
                continue;
            }

            self.stats.scanned += 1;
            let path = entry.path();
            match self.decoder.try_parse(path) {
                ParseOutcome::NotThisFormat => {
                    debug!("Not DICOM: {}", path.display());
                }
                ParseOutcome::Failed(reason) => {
                    warn!("Unexpected error reading {}: {}", path.display(), reason);
                    self.stats.failures += 1;
                }
                ParseOutcome::Parsed(record) if record.is_valid_instance() => {
                    debug!("Found: {}", path.display());
                    self.stats.found += 1;
                    return Some(record);
                }
                ParseOutcome::Parsed(_) => {
                    debug!("No PatientName, excluded: {}", path.display());
                    self.stats.rejected += 1;
                }
            }
        }

        self.finished = true;
        info!(
            "Scan complete. Found {} valid DICOM files ({} files scanned)",
            self.stats.found, self.stats.scanned
        );
        None
    }
}

/// Whether the entry is a regular file, following a symlink to its target
///
/// Symlinked directories are not descended into, but symlinked files are
/// visited like any other file.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}
