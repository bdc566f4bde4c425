//! Directory-wide conversion
//!
//! Files are handled one at a time, fully read then fully written, in file
//! name order. Nothing is shared between files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::records::{read_records, write_records};

/// What to do when one file in a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure. Files already written stay on disk,
    /// later files are never attempted.
    #[default]
    Abort,
    /// Report the failure and carry on with the next file.
    Continue,
}

/// A successfully converted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub target: PathBuf,
    pub rows: usize,
}

/// Result of one file within a batch, handed to the progress callback
#[derive(Debug, Clone, Copy)]
pub enum FileOutcome<'a> {
    Converted(&'a Conversion),
    Failed {
        source: &'a Path,
        error: &'a ConvertError,
    },
}

/// Totals for a finished batch
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub converted: Vec<Conversion>,
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl ConversionSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// True when the file name ends in `.csv`, ignoring case.
pub fn is_csv(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".csv"))
        .unwrap_or(false)
}

/// Sibling path with the extension swapped for `.json`.
///
/// A file named just `.csv` has no stem and maps to `.json`.
///
/// ```
/// use std::path::Path;
/// use analytics_csv::json_path_for;
///
/// assert_eq!(json_path_for(Path::new("/data/sales.CSV")), Path::new("/data/sales.json"));
/// assert_eq!(json_path_for(Path::new("/data/.csv")), Path::new("/data/.json"));
/// ```
pub fn json_path_for(csv_path: &Path) -> PathBuf {
    // `Path` treats ".csv" as a stem with no extension.
    let bare = csv_path
        .file_name()
        .is_some_and(|name| name.eq_ignore_ascii_case(".csv"));
    if bare {
        csv_path.with_file_name(".json")
    } else {
        csv_path.with_extension("json")
    }
}

/// Convert one CSV file to its sibling `.json`, overwriting any existing one.
pub fn convert_file(csv_path: &Path) -> Result<Conversion> {
    let target = json_path_for(csv_path);
    let records = read_records(csv_path)?;
    write_records(&records, &target)?;

    tracing::debug!(
        source = %csv_path.display(),
        target = %target.display(),
        rows = records.len(),
        "converted"
    );

    Ok(Conversion {
        source: csv_path.to_path_buf(),
        target,
        rows: records.len(),
    })
}

/// CSV files directly inside `dir` (no recursion), sorted by name.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| ConvertError::read_dir(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ConvertError::read_dir(dir, e))?.path();
        if path.is_file() && is_csv(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every CSV file in `dir`.
///
/// `on_outcome` is called after each file, before the next one starts, so
/// callers can print progress as it happens. Under `FailurePolicy::Abort`
/// the first error is returned as-is.
pub fn convert_dir<F>(dir: &Path, policy: FailurePolicy, mut on_outcome: F) -> Result<ConversionSummary>
where
    F: FnMut(FileOutcome<'_>),
{
    let files = csv_files(dir)?;
    tracing::info!(dir = %dir.display(), files = files.len(), "starting CSV conversion");

    let mut summary = ConversionSummary::default();
    for path in files {
        match convert_file(&path) {
            Ok(conversion) => {
                on_outcome(FileOutcome::Converted(&conversion));
                summary.converted.push(conversion);
            }
            Err(error) if policy == FailurePolicy::Continue => {
                tracing::warn!(file = %path.display(), %error, "conversion failed, continuing");
                on_outcome(FileOutcome::Failed {
                    source: &path,
                    error: &error,
                });
                summary.failed.push((path, error));
            }
            Err(error) => return Err(error),
        }
    }

    Ok(summary)
}
