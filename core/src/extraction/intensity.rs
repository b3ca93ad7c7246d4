use crate::decoder::{DecoderAdapter, PixelOutcome};
use crate::extraction::attributes::MISSING_VALUE;
use crate::record::ParsedRecord;
use log::debug;
use std::fmt;

/// Value written when a pixel payload exists but cannot be reduced
pub const ANALYSIS_ERROR: &str = "Error de análisis";

/// Average pixel intensity of a record, or why it is unavailable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntensityMetric {
    /// Mean over every stored sample
    Value(f64),
    /// The record has no pixel payload
    NotApplicable,
    /// The payload exists but decoding or reduction failed
    AnalysisError,
}

impl IntensityMetric {
    /// Numeric value, if one was computed
    pub fn value(&self) -> Option<f64> {
        match self {
            IntensityMetric::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for IntensityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the fractional part: 3.0 rather than 3
            IntensityMetric::Value(v) => write!(f, "{:?}", v),
            IntensityMetric::NotApplicable => write!(f, "{}", MISSING_VALUE),
            IntensityMetric::AnalysisError => write!(f, "{}", ANALYSIS_ERROR),
        }
    }
}

/// Arithmetic mean of the samples, `None` when there are none
pub fn mean_intensity(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Computes the average intensity of a record's pixel payload
pub fn analyze_intensity<D: DecoderAdapter + ?Sized>(
    decoder: &D,
    record: &ParsedRecord,
) -> IntensityMetric {
    match decoder.decode_pixels(record) {
        PixelOutcome::NoPayload => IntensityMetric::NotApplicable,
        PixelOutcome::Samples(samples) => match mean_intensity(&samples) {
            Some(mean) => IntensityMetric::Value(mean),
            None => {
                debug!("Empty pixel payload in {}", record.path().display());
                IntensityMetric::AnalysisError
            }
        },
        PixelOutcome::Failed(reason) => {
            debug!(
                "Pixel analysis failed for {}: {}",
                record.path().display(),
                reason
            );
            IntensityMetric::AnalysisError
        }
    }
}
