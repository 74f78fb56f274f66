use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DataFormatError;
use super::model::GdpDataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a wide GDP table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header `country,<year>,<year>,...`, one row per country
/// * `.json`    – `[{ "country": "Sweden", "1800": 975, ... }, ...]`
/// * `.parquet` – `country` string column plus one column per year
pub fn load_file(path: &Path) -> Result<GdpDataset, DataFormatError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DataFormatError::UnsupportedExtension(other.to_string())),
    }
}

/// Coerce a raw cell to a numeric value.  Blank or unparseable cells
/// become `None` and stay in the table as gaps.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Shared wide-table validation
// ---------------------------------------------------------------------------

/// Reject ambiguous wide tables, then reshape.
fn build_dataset(
    years: Vec<String>,
    rows: Vec<(String, Vec<Option<f64>>)>,
) -> Result<GdpDataset, DataFormatError> {
    let mut seen_years: BTreeSet<&str> = BTreeSet::new();
    for year in &years {
        if !seen_years.insert(year.as_str()) {
            return Err(DataFormatError::DuplicateYear(year.clone()));
        }
    }

    let mut seen_countries: BTreeSet<&str> = BTreeSet::new();
    for (country, _) in &rows {
        if !seen_countries.insert(country.as_str()) {
            return Err(DataFormatError::DuplicateCountry(country.clone()));
        }
    }

    Ok(GdpDataset::from_wide(years, rows))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<GdpDataset, DataFormatError> {
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}

/// Parse a wide CSV table from any reader.  First header = country
/// column, remaining headers = year labels in declared order.
fn parse_csv<R: Read>(input: R) -> Result<GdpDataset, DataFormatError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.len() < 2 {
        return Err(DataFormatError::TooFewColumns(headers.len()));
    }
    let years: Vec<String> = headers[1..].to_vec();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let country = record.get(0).unwrap_or("").to_string();
        let cells: Vec<Option<f64>> = (1..headers.len())
            .map(|i| coerce_numeric(record.get(i).unwrap_or("")))
            .collect();
        rows.push((country, cells));
    }

    build_dataset(years, rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "country": "Sweden", "1800": 975, "1801": 978, ... },
///   ...
/// ]
/// ```
///
/// The first key of the first record is the country column; the
/// remaining keys, in declared order, form the year axis.
fn load_json(path: &Path) -> Result<GdpDataset, DataFormatError> {
    let text = std::fs::read_to_string(path)?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<GdpDataset, DataFormatError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let records = root
        .as_array()
        .ok_or_else(|| DataFormatError::Json("expected a top-level array".to_string()))?;

    let first = records
        .first()
        .and_then(|r| r.as_object())
        .ok_or_else(|| DataFormatError::Json("expected a non-empty array of objects".to_string()))?;

    let mut keys = first.keys().cloned();
    let country_col = keys
        .next()
        .ok_or(DataFormatError::TooFewColumns(0))?;
    let years: Vec<String> = keys.collect();
    if years.is_empty() {
        return Err(DataFormatError::TooFewColumns(1));
    }

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataFormatError::Json(format!("row {i} is not an object")))?;
        let country = obj
            .get(&country_col)
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                DataFormatError::Json(format!("row {i}: missing or non-string '{country_col}'"))
            })?
            .to_string();
        let cells: Vec<Option<f64>> = years
            .iter()
            .map(|year| obj.get(year).and_then(json_cell))
            .collect();
        rows.push((country, cells));
    }

    build_dataset(years, rows)
}

/// Numeric coercion for a JSON cell.  Strings go through the same text
/// coercion as CSV cells.
fn json_cell(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => coerce_numeric(s),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet rendition of the wide table.
///
/// Expected schema: first column Utf8 country names, every other column
/// one year, typed Float64/Float32/Int64/Int32 or Utf8 (text cells go
/// through the usual coercion).  Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<GdpDataset, DataFormatError> {
    let file = std::fs::File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let schema = builder.schema().clone();
    if schema.fields().len() < 2 {
        return Err(DataFormatError::TooFewColumns(schema.fields().len()));
    }
    let years: Vec<String> = schema
        .fields()
        .iter()
        .skip(1)
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.build()?;
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        for row in 0..batch.num_rows() {
            let country = string_cell(batch.column(0), row).ok_or_else(|| {
                DataFormatError::Parquet(format!("row {row}: country column is not a string"))
            })?;
            let cells: Vec<Option<f64>> = (1..batch.num_columns())
                .map(|col| numeric_cell(batch.column(col), row))
                .collect();
            rows.push((country, cells));
        }
    }

    build_dataset(years, rows)
}

// -- Parquet / Arrow helpers --

/// Read one cell of the country column as text.
fn string_cell(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|arr| arr.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

/// Coerce one cell of a year column.  Numeric columns pass through,
/// string columns go through text coercion, anything else is a gap.
fn numeric_cell(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|arr| arr.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .and_then(|arr| coerce_numeric(arr.value(row))),
        _ => None,
    }
}
