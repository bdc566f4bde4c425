//! CSV to JSON batch conversion for analytics datasets
//!
//! Each `*.csv` in a directory becomes a sibling `*.json` holding an array
//! of objects, one per row, keyed by the header line.

pub mod batch;
pub mod error;
pub mod records;

pub use batch::{
    convert_dir, convert_file, csv_files, is_csv, json_path_for, Conversion, ConversionSummary,
    FailurePolicy, FileOutcome,
};
pub use error::{ConvertError, Result};
pub use records::{read_records, write_records, CsvRecord};

/// Directory scanned by `analytics convert`.
pub const DATASET_DIR: &str = "/home/sdd/Téléchargements/Dataset";
