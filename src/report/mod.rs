//! Presentation helpers: console tables, CSV export and JSON output

pub mod csv;
pub mod json;
pub mod table;

pub use json::{CategoryJson, ComparisonJson, JsonOutput, ProjectionJson, SensitivityJson};
pub use table::ReportFormatter;
