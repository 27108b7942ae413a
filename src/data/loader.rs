use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{DatasetError, LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Column names as they appear in the source table
// ---------------------------------------------------------------------------

pub const LAUNCH_SITE_COL: &str = "Launch Site";
pub const PAYLOAD_MASS_COL: &str = "Payload Mass (kg)";
pub const CLASS_COL: &str = "class";
pub const BOOSTER_CATEGORY_COL: &str = "Booster Version Category";

const REQUIRED_COLS: [&str; 4] = [
    LAUNCH_SITE_COL,
    PAYLOAD_MASS_COL,
    CLASS_COL,
    BOOSTER_CATEGORY_COL,
];

/// One row as found in CSV/JSON sources. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – delimited text with a header row (canonical input)
/// * `.json`    – records-oriented array, `df.to_json(orient='records')`
/// * `.parquet` – flat scalar columns, as written by `df.to_parquet()`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Parse CSV from any reader. Header row is mandatory; extra columns pass
/// through `RawRecord` untouched.
pub fn read_csv<R: std::io::Read>(reader: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col).into());
        }
    }

    let mut raws = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        raws.push(raw);
    }

    dataset_from_raw(raws)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

pub fn read_json(text: &str) -> Result<LaunchDataset> {
    let raws: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;
    dataset_from_raw(raws)
}

// ---------------------------------------------------------------------------
// Raw rows → dataset
// ---------------------------------------------------------------------------

fn dataset_from_raw(raws: Vec<RawRecord>) -> Result<LaunchDataset> {
    let mut records = Vec::with_capacity(raws.len());
    for (row_no, raw) in raws.into_iter().enumerate() {
        let outcome = Outcome::from_class(raw.class, row_no)?;
        records.push(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            booster_category: raw.booster_category,
            outcome,
        });
    }
    Ok(LaunchDataset::from_records(records)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Expected schema: the four required columns as scalar values
/// (`Utf8`/`LargeUtf8` for the string columns, any int/float width for the
/// numeric ones). Any other columns are ignored.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let site_idx = schema
            .index_of(LAUNCH_SITE_COL)
            .map_err(|_| DatasetError::MissingColumn(LAUNCH_SITE_COL))?;
        let payload_idx = schema
            .index_of(PAYLOAD_MASS_COL)
            .map_err(|_| DatasetError::MissingColumn(PAYLOAD_MASS_COL))?;
        let class_idx = schema
            .index_of(CLASS_COL)
            .map_err(|_| DatasetError::MissingColumn(CLASS_COL))?;
        let booster_idx = schema
            .index_of(BOOSTER_CATEGORY_COL)
            .map_err(|_| DatasetError::MissingColumn(BOOSTER_CATEGORY_COL))?;

        for row in 0..batch.num_rows() {
            let row_no = records.len();

            let site = string_value(batch.column(site_idx), row)
                .with_context(|| format!("row {row_no}: reading '{LAUNCH_SITE_COL}'"))?;
            let payload_mass_kg = numeric_value(batch.column(payload_idx), row)
                .with_context(|| format!("row {row_no}: reading '{PAYLOAD_MASS_COL}'"))?;
            let class = integer_value(batch.column(class_idx), row)
                .with_context(|| format!("row {row_no}: reading '{CLASS_COL}'"))?;
            let booster_category = string_value(batch.column(booster_idx), row)
                .with_context(|| format!("row {row_no}: reading '{BOOSTER_CATEGORY_COL}'"))?;

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                booster_category,
                outcome: Outcome::from_class(class, row_no)?,
            });
        }
    }

    Ok(LaunchDataset::from_records(records)?)
}

// -- Parquet / Arrow helpers --

fn string_value(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok(arr.value(row).to_string())
        }
        other => bail!("expected a string column, got {other:?}"),
    }
}

fn numeric_value(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        other => bail!("expected a numeric column, got {other:?}"),
    }
}

fn integer_value(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as i64)
        }
        other => bail!("expected an integer column, got {other:?}"),
    }
}
