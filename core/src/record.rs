use crate::error::Result;
use crate::extraction::tags::{get_non_empty_string, has_element, PATIENT_NAME, PIXEL_DATA};
use dicom_object::{open_file, DefaultDicomObject};
use std::path::{Path, PathBuf};

/// A decoded DICOM file together with the path it was read from
///
/// Records are never mutated after decoding. The pipeline consumes them by
/// value and drops each one as soon as its table row has been built.
#[derive(Debug)]
pub struct ParsedRecord {
    path: PathBuf,
    object: DefaultDicomObject,
}

impl ParsedRecord {
    /// Wraps an already-opened DICOM object
    pub fn new(path: PathBuf, object: DefaultDicomObject) -> Self {
        Self { path, object }
    }

    /// Opens and decodes a DICOM file
    ///
    /// The file handle is released before this returns, whether or not
    /// decoding succeeded.
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let object = open_file(&path)?;
        Ok(Self::new(path, object))
    }

    /// Path of the source file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The decoded DICOM object, including its file meta group
    pub fn object(&self) -> &DefaultDicomObject {
        &self.object
    }

    /// Trimmed PatientName, if present and non-empty
    pub fn patient_name(&self) -> Option<String> {
        get_non_empty_string(&self.object, PATIENT_NAME)
    }

    /// Whether this record qualifies as a valid instance
    ///
    /// Files that parse but carry no usable PatientName are excluded from
    /// the result set without being treated as errors.
    pub fn is_valid_instance(&self) -> bool {
        self.patient_name().is_some()
    }

    /// Whether the record carries a PixelData element
    pub fn has_pixel_data(&self) -> bool {
        has_element(&self.object, PIXEL_DATA)
    }
}
