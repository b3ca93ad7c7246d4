//! Fixtures for building small DICOM datasets in tests

use crate::record::ParsedRecord;
use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{DefaultDicomObject, FileMetaTableBuilder, InMemDicomObject};
use std::path::{Path, PathBuf};

/// Fluent builder for test datasets
pub struct DatasetBuilder {
    dcm: InMemDicomObject,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self {
            dcm: InMemDicomObject::new_empty(),
        }
    }

    fn text(mut self, tag: Tag, vr: VR, value: &str) -> Self {
        self.dcm
            .put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
        self
    }

    fn us(mut self, tag: Tag, value: u16) -> Self {
        self.dcm
            .put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
        self
    }

    pub fn patient_name(self, value: &str) -> Self {
        self.text(tags::PATIENT_NAME, VR::PN, value)
    }

    pub fn patient_id(self, value: &str) -> Self {
        self.text(tags::PATIENT_ID, VR::LO, value)
    }

    pub fn study_instance_uid(self, value: &str) -> Self {
        self.text(tags::STUDY_INSTANCE_UID, VR::UI, value)
    }

    pub fn study_description(self, value: &str) -> Self {
        self.text(tags::STUDY_DESCRIPTION, VR::LO, value)
    }

    pub fn study_date(self, value: &str) -> Self {
        self.text(tags::STUDY_DATE, VR::DA, value)
    }

    pub fn modality(self, value: &str) -> Self {
        self.text(tags::MODALITY, VR::CS, value)
    }

    /// Single-frame 16-bit unsigned MONOCHROME2 image
    pub fn mono16_image(self, rows: u16, columns: u16, samples: &[u16]) -> Self {
        let mut builder = self
            .us(tags::SAMPLES_PER_PIXEL, 1)
            .text(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2")
            .us(tags::ROWS, rows)
            .us(tags::COLUMNS, columns)
            .us(tags::BITS_ALLOCATED, 16)
            .us(tags::BITS_STORED, 16)
            .us(tags::HIGH_BIT, 15)
            .us(tags::PIXEL_REPRESENTATION, 0);
        builder.dcm.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(samples.iter().copied().collect()),
        ));
        builder
    }

    /// PixelData without any image pixel description
    pub fn raw_pixel_data(mut self, bytes: &[u8]) -> Self {
        self.dcm.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(bytes.iter().copied().collect()),
        ));
        self
    }

    /// Wraps the dataset with a Secondary Capture file meta group
    pub fn into_file_object(self) -> DefaultDicomObject {
        self.dcm
            .with_meta(
                FileMetaTableBuilder::new()
                    .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                    .media_storage_sop_instance_uid("1.2.826.0.1.3680043.2.1125.1")
                    .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            )
            .expect("valid file meta")
    }
}

/// Builds an in-memory record that was never written to disk
pub fn record_from(builder: DatasetBuilder) -> ParsedRecord {
    ParsedRecord::new(PathBuf::from("memory.dcm"), builder.into_file_object())
}

/// Writes the dataset as a DICOM file at `path`
pub fn write_dicom(path: &Path, builder: DatasetBuilder) {
    builder
        .into_file_object()
        .write_to_file(path)
        .expect("write DICOM fixture");
}
