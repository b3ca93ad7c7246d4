//! DICOM decoding boundary
//!
//! Everything the pipeline needs from the dicom-rs crates goes through the
//! [`DecoderAdapter`] trait. Outcomes are explicit three-way enums so callers
//! can tell "not a DICOM file" apart from "a DICOM file we failed to read".

use crate::record::ParsedRecord;
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Length of the DICOM preamble preceding the magic code
const PREAMBLE_LEN: usize = 128;

/// Magic code found right after the preamble
const DICOM_MAGIC: &[u8; 4] = b"DICM";

/// Outcome of trying to parse a candidate file
#[derive(Debug)]
pub enum ParseOutcome {
    /// The file does not carry a DICOM header
    NotThisFormat,
    /// The file was decoded
    Parsed(ParsedRecord),
    /// The file looks like DICOM but could not be decoded
    Failed(String),
}

/// Outcome of decoding the pixel payload of a record
#[derive(Debug, Clone, PartialEq)]
pub enum PixelOutcome {
    /// The record has no PixelData element
    NoPayload,
    /// Flattened samples over all frames and channels
    Samples(Vec<f64>),
    /// PixelData exists but could not be turned into samples
    Failed(String),
}

/// Parses files and pixel payloads
pub trait DecoderAdapter {
    /// Attempts to parse `path` as a DICOM file
    fn try_parse(&self, path: &Path) -> ParseOutcome;

    /// Decodes the pixel payload of an already parsed record
    fn decode_pixels(&self, record: &ParsedRecord) -> PixelOutcome;
}

/// [`DecoderAdapter`] backed by `dicom-object` and `dicom-pixeldata`
#[derive(Debug, Default, Clone, Copy)]
pub struct DicomDecoder;

impl DecoderAdapter for DicomDecoder {
    fn try_parse(&self, path: &Path) -> ParseOutcome {
        match has_dicom_preamble(path) {
            Ok(true) => {}
            Ok(false) => return ParseOutcome::NotThisFormat,
            Err(e) => return ParseOutcome::Failed(e.to_string()),
        }

        match ParsedRecord::from_file(path.to_path_buf()) {
            Ok(record) => ParseOutcome::Parsed(record),
            Err(e) => ParseOutcome::Failed(e.to_string()),
        }
    }

    fn decode_pixels(&self, record: &ParsedRecord) -> PixelOutcome {
        if !record.has_pixel_data() {
            return PixelOutcome::NoPayload;
        }

        let decoded = match record.object().decode_pixel_data() {
            Ok(decoded) => decoded,
            Err(e) => return PixelOutcome::Failed(e.to_string()),
        };

        // Stored values, as read from the payload; no rescale slope/intercept
        let options = ConvertOptions::new().with_modality_lut(ModalityLutOption::None);
        match decoded.to_vec_with_options::<f64>(&options) {
            Ok(samples) => {
                debug!(
                    "Decoded {} samples from {}",
                    samples.len(),
                    record.path().display()
                );
                PixelOutcome::Samples(samples)
            }
            Err(e) => PixelOutcome::Failed(e.to_string()),
        }
    }
}

/// Checks if a file has a DICOM header
///
/// DICOM files have a 128-byte preamble followed by the 4-byte "DICM" magic
/// string. Files shorter than that are not DICOM. I/O failures other than a
/// short read are returned so the caller can report them.
pub fn has_dicom_preamble(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;

    let mut buffer = [0u8; PREAMBLE_LEN + 4];
    match file.read_exact(&mut buffer) {
        Ok(()) => Ok(&buffer[PREAMBLE_LEN..] == DICOM_MAGIC),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}
