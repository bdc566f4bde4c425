//! CSV to JSON conversion command
//!
//! Converts every CSV in the dataset directory, printing one line per file.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use analytics_csv::{convert_dir, FailurePolicy, FileOutcome, DATASET_DIR};

const COMPLETION_LINE: &str = "🎉 Conversion CSV → JSON terminée (FORMAT CORRECT)";

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Report a failing file and continue with the rest instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

/// Convert the dataset directory
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let policy = if args.keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };

    convert_in(Path::new(DATASET_DIR), policy, &mut io::stdout().lock())
}

/// Convert every CSV in `dir`, writing progress and the completion line to `out`.
///
/// Under `FailurePolicy::Continue` the completion line is still written, then
/// the failure count is returned as an error.
pub fn convert_in(dir: &Path, policy: FailurePolicy, out: &mut impl Write) -> Result<()> {
    let mut write_error = None;
    let summary = convert_dir(dir, policy, |outcome| {
        if write_error.is_none() {
            write_error = write_outcome(&mut *out, outcome).err();
        }
    })
    .context("CSV conversion aborted")?;

    if let Some(err) = write_error {
        return Err(err).context("failed to write conversion progress");
    }

    writeln!(out, "{COMPLETION_LINE}")?;
    out.flush()?;

    if !summary.is_complete() {
        bail!(
            "{} of {} files failed to convert",
            summary.failed.len(),
            summary.failed.len() + summary.converted.len()
        );
    }

    Ok(())
}

fn write_outcome(out: &mut impl Write, outcome: FileOutcome<'_>) -> io::Result<()> {
    match outcome {
        FileOutcome::Converted(conversion) => writeln!(
            out,
            "✔ {} → {}",
            file_name(&conversion.source),
            file_name(&conversion.target)
        ),
        FileOutcome::Failed { source, error } => {
            writeln!(out, "✘ {}: {}", file_name(source), error)
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
