pub mod attributes;
pub mod intensity;
pub mod tags;

pub use attributes::{extract_attributes, AttributeRecord, Field, FIELDS, MISSING_VALUE};
pub use intensity::{analyze_intensity, mean_intensity, IntensityMetric, ANALYSIS_ERROR};
pub use tags::*;
