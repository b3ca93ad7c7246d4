use crate::extraction::tags::{
    get_non_empty_string, COLUMNS, MODALITY, PATIENT_ID, PATIENT_NAME, ROWS, STUDY_DATE,
    STUDY_DESCRIPTION, STUDY_INSTANCE_UID,
};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use std::fmt;

/// Value written for absent or blank attributes
pub const MISSING_VALUE: &str = "N/A";

/// Descriptive attributes pulled from every valid file
///
/// The declaration order is the column order of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PatientId,
    PatientName,
    StudyInstanceUid,
    StudyDescription,
    StudyDate,
    Modality,
    Rows,
    Columns,
}

/// All fields, in column order
pub const FIELDS: [Field; 8] = [
    Field::PatientId,
    Field::PatientName,
    Field::StudyInstanceUid,
    Field::StudyDescription,
    Field::StudyDate,
    Field::Modality,
    Field::Rows,
    Field::Columns,
];

impl Field {
    /// Column label used in previews and exports
    pub fn label(self) -> &'static str {
        match self {
            Field::PatientId => "Patient ID",
            Field::PatientName => "Patient Name",
            Field::StudyInstanceUid => "Study Instance UID",
            Field::StudyDescription => "Study Description",
            Field::StudyDate => "Study Date",
            Field::Modality => "Modality",
            Field::Rows => "Rows",
            Field::Columns => "Columns",
        }
    }

    /// DICOM tag backing this field
    pub fn tag(self) -> Tag {
        match self {
            Field::PatientId => PATIENT_ID,
            Field::PatientName => PATIENT_NAME,
            Field::StudyInstanceUid => STUDY_INSTANCE_UID,
            Field::StudyDescription => STUDY_DESCRIPTION,
            Field::StudyDate => STUDY_DATE,
            Field::Modality => MODALITY,
            Field::Rows => ROWS,
            Field::Columns => COLUMNS,
        }
    }

    /// Reads the field, treating blank values as absent
    pub fn lookup(self, dcm: &InMemDicomObject) -> Option<String> {
        get_non_empty_string(dcm, self.tag())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Extracted attribute values, one per [`Field`] in column order
///
/// Every value is either the trimmed text of the element or [`MISSING_VALUE`].
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRecord {
    values: Vec<String>,
}

impl AttributeRecord {
    /// Value for a single field
    pub fn get(&self, field: Field) -> &str {
        FIELDS
            .iter()
            .position(|f| *f == field)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .unwrap_or(MISSING_VALUE)
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// `(field, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        FIELDS.iter().copied().zip(self.values())
    }
}

/// Extracts the fixed attribute set from a DICOM object
///
/// Absence is data: a missing or blank element becomes [`MISSING_VALUE`]
/// and never an error.
pub fn extract_attributes(dcm: &InMemDicomObject) -> AttributeRecord {
    let values = FIELDS
        .iter()
        .map(|field| {
            field
                .lookup(dcm)
                .unwrap_or_else(|| MISSING_VALUE.to_string())
        })
        .collect();

    AttributeRecord { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::DatasetBuilder;
    use rstest::rstest;

    fn full_dataset() -> DatasetBuilder {
        DatasetBuilder::new()
            .patient_id("PID-001")
            .patient_name("DOE^JOHN")
            .study_instance_uid("1.2.840.113619.2.55.3")
            .study_description("CT HEAD W/O CONTRAST")
            .study_date("20240117")
            .modality("CT")
            .mono16_image(2, 2, &[0, 2, 4, 6])
    }

    #[test]
    fn test_extract_all_fields() {
        let dcm = full_dataset().into_file_object();
        let record = extract_attributes(&dcm);

        let values: Vec<&str> = record.values().collect();
        assert_eq!(
            values,
            vec![
                "PID-001",
                "DOE^JOHN",
                "1.2.840.113619.2.55.3",
                "CT HEAD W/O CONTRAST",
                "20240117",
                "CT",
                "2",
                "2",
            ]
        );
    }

    #[test]
    fn test_extract_empty_dataset() {
        let dcm = DatasetBuilder::new().into_file_object();
        let record = extract_attributes(&dcm);

        assert_eq!(record.values().count(), FIELDS.len());
        assert!(record.values().all(|v| v == MISSING_VALUE));
    }

    #[rstest]
    #[case("", MISSING_VALUE)]
    #[case("   ", MISSING_VALUE)]
    #[case("  Chest PA ", "Chest PA")]
    #[case("Knee", "Knee")]
    fn test_study_description_sentinel(#[case] raw: &str, #[case] expected: &str) {
        let dcm = DatasetBuilder::new()
            .patient_name("A")
            .study_description(raw)
            .into_file_object();

        assert_eq!(extract_attributes(&dcm).get(Field::StudyDescription), expected);
    }

    #[test]
    fn test_iter_pairs_in_column_order() {
        let dcm = DatasetBuilder::new()
            .patient_name("DOE^JANE")
            .modality("MR")
            .into_file_object();
        let record = extract_attributes(&dcm);

        let pairs: Vec<(Field, &str)> = record.iter().collect();
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[0], (Field::PatientId, MISSING_VALUE));
        assert_eq!(pairs[1], (Field::PatientName, "DOE^JANE"));
        assert_eq!(pairs[5], (Field::Modality, "MR"));
        assert_eq!(pairs[7], (Field::Columns, MISSING_VALUE));
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::StudyInstanceUid.to_string(), "Study Instance UID");
        assert_eq!(FIELDS[0].label(), "Patient ID");
        assert_eq!(FIELDS[7].label(), "Columns");
    }
}
