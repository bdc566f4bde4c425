//! Reading CSV rows into ordered records and writing them out as JSON

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ConvertError, Result};

/// One data row keyed by header name, columns in header order.
pub type CsvRecord = IndexMap<String, String>;

/// Four-space indentation for written JSON.
const JSON_INDENT: &[u8] = b"    ";

/// Parse a comma-delimited UTF-8 file whose first line is the header.
///
/// Every row must have as many fields as the header. Blank lines are
/// skipped; an empty or header-only file yields no records. When a header
/// name repeats, the column keeps its first position and the last value.
pub fn read_records(path: &Path) -> Result<Vec<CsvRecord>> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| ConvertError::csv(path, e))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| ConvertError::csv(path, e))?;
        let record: CsvRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Write records as an indented JSON array of objects.
///
/// Non-ASCII text is written as-is, not `\u` escaped. An existing file at
/// `path` is replaced.
pub fn write_records(records: &[CsvRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    {
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|e| ConvertError::json(path, e))?;
    }

    writer.flush().map_err(|e| ConvertError::io(path, e))?;
    Ok(())
}
