//! CSV loading with load-time numeric validation.
//!
//! Raw values are textual at rest; every numeric field is parsed exactly
//! once here so domain computation never sees unparsed text. Rows that fail
//! validation are rejected and logged rather than coerced to zero, since a
//! coerced zero would corrupt the computed domain for every other point.

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::core::{FieldDef, Record};
use crate::error::{ChartError, ChartResult};

/// Column holding the categorical abbreviation displayed next to each point.
pub const ABBR_COLUMN: &str = "abbr";

/// Loads records from a CSV file. A missing or unreadable file is fatal to
/// chart initialization; nothing renders partially.
pub fn load_records_csv(path: impl AsRef<Path>, required: &[FieldDef]) -> ChartResult<Vec<Record>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    read_records_from(reader, required)
}

/// Reads records from any CSV byte stream (headers required).
pub fn read_records<R: Read>(reader: R, required: &[FieldDef]) -> ChartResult<Vec<Record>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_records_from(reader, required)
}

fn read_records_from<R: Read>(
    mut reader: csv::Reader<R>,
    required: &[FieldDef],
) -> ChartResult<Vec<Record>> {
    let headers = reader.headers()?.clone();
    let abbr_index = column_index(&headers, ABBR_COLUMN)?;
    let mut field_indices = Vec::with_capacity(required.len());
    for field in required {
        field_indices.push((field.key.as_str(), column_index(&headers, &field.key)?));
    }

    let mut records = Vec::new();
    let mut rejected = 0usize;
    for row in reader.records() {
        let row = row?;
        let abbr = row.get(abbr_index).unwrap_or_default();
        if abbr.is_empty() {
            warn!(line = row.position().map(|p| p.line()), "rejecting row without abbreviation");
            rejected += 1;
            continue;
        }

        match parse_row(&row, abbr, &field_indices) {
            Ok(values) => records.push(Record::new(abbr, values)),
            Err(error) => {
                warn!(abbr, %error, "rejecting record failing numeric validation");
                rejected += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(ChartError::InvalidData(
            "no usable records in chart data".to_owned(),
        ));
    }

    info!(
        loaded = records.len(),
        rejected, "chart data loaded and validated"
    );
    Ok(records)
}

fn parse_row(
    row: &csv::StringRecord,
    abbr: &str,
    field_indices: &[(&str, usize)],
) -> ChartResult<IndexMap<String, f64>> {
    let mut values = IndexMap::with_capacity(field_indices.len());
    for (key, index) in field_indices {
        let raw = row.get(*index).unwrap_or_default();
        let parsed: f64 = raw.parse().map_err(|_| ChartError::DataIntegrity {
            abbr: abbr.to_owned(),
            field: (*key).to_owned(),
        })?;
        if !parsed.is_finite() {
            return Err(ChartError::DataIntegrity {
                abbr: abbr.to_owned(),
                field: (*key).to_owned(),
            });
        }
        values.insert((*key).to_owned(), parsed);
    }
    Ok(values)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> ChartResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ChartError::InvalidData(format!("chart data is missing column `{name}`")))
}
