//! Animal-table ingestion: CSV file → validated frame → typed records.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::StrptimeOptions;
use polars::prelude::*;
use tracing::{debug, info};

use crate::error::StockError;
use crate::record::{AnimalRecord, Sex};
use crate::schema::animal;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The loaded animal table: the parsed frame (written verbatim into the raw
/// report sheet) plus the typed records the analyzers consume.
#[derive(Debug, Clone)]
pub struct AnimalTable {
    pub frame: DataFrame,
    pub records: Vec<AnimalRecord>,
}

/// Load and validate the animal CSV.
///
/// All columns are read as strings first; the date and weight columns are
/// then parsed leniently, so an unparseable cell becomes a missing value
/// rather than a failure. A missing file, a missing required column, or an
/// empty animal id aborts the load. Extra user columns are preserved as
/// strings and flow into the raw report sheet untouched.
pub fn load_animal_table(path: &Path) -> Result<AnimalTable, StockError> {
    ensure_file_exists(path)?;

    let raw = read_csv_as_strings(path)?;
    require_columns(&raw, &animal::REQUIRED)?;

    let mut lazy = raw.clone().lazy();
    for col_name in animal::DATE_COLUMNS {
        if raw.column(col_name).is_ok() {
            lazy = lazy.with_columns([col(col_name)
                .str()
                .strip_chars(lit(" \t\r\n"))
                .str()
                .to_date(StrptimeOptions {
                    format: Some(DATE_FORMAT.into()),
                    strict: false,
                    ..Default::default()
                })]);
        }
    }
    for col_name in animal::WEIGHT_COLUMNS {
        lazy = lazy.with_columns([col(col_name)
            .str()
            .strip_chars(lit(" \t\r\n"))
            .cast(DataType::Float64)]);
    }
    let frame = lazy.collect()?;

    let records = materialize_records(&frame)?;
    info!(rows = records.len(), "loaded animal records from {}", path.display());

    Ok(AnimalTable { frame, records })
}

fn ensure_file_exists(path: &Path) -> Result<(), StockError> {
    if !path.exists() {
        let cwd = std::env::current_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|_| ".".to_string());
        return Err(StockError::FileNotFound(format!(
            "{} (working directory: {})",
            path.display(),
            cwd
        )));
    }
    Ok(())
}

/// Read a CSV file with all columns as String dtype, trimming whitespace
/// from column names.
fn read_csv_as_strings(path: &Path) -> Result<DataFrame, StockError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), StockError> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(StockError::MissingColumn(col_name.to_string()));
        }
    }
    Ok(())
}

fn materialize_records(frame: &DataFrame) -> Result<Vec<AnimalRecord>, StockError> {
    let height = frame.height();

    let ids = frame.column(animal::ANIMAL_ID)?.str()?;
    let sexes = frame.column(animal::SEX)?.str()?;
    let births = date_column(frame, animal::BIRTH_DATE)?;
    let exits = date_column(frame, animal::EXIT_DATE)?;
    let last_weighings = optional_date_column(frame, animal::LAST_WEIGHT_DATE, height)?;
    let exit_reasons = optional_str_column(frame, animal::EXIT_REASON, height)?;
    let entry_weights = frame
        .column(animal::ENTRY_WEIGHT_KG)?
        .as_materialized_series()
        .f64()?;
    let exit_weights = frame
        .column(animal::EXIT_WEIGHT_KG)?
        .as_materialized_series()
        .f64()?;

    let mut records = Vec::with_capacity(height);
    for i in 0..height {
        let id = ids.get(i).map(str::trim).unwrap_or_default();
        if id.is_empty() {
            // Data rows are 1-based and the header occupies row 1.
            return Err(StockError::InvalidData(format!(
                "empty animal_id in row {}",
                i + 2
            )));
        }

        let sex = match sexes.get(i) {
            Some(raw) => {
                let parsed = Sex::parse(raw);
                if parsed == Sex::Unknown && !raw.trim().is_empty() {
                    debug!(row = i + 2, value = raw, "unrecognized sex value");
                }
                parsed
            }
            None => Sex::Unknown,
        };

        records.push(AnimalRecord {
            id: id.to_string(),
            sex,
            birth_date: births[i],
            exit_date: exits[i],
            exit_reason: exit_reasons[i].clone(),
            entry_weight_kg: entry_weights.get(i),
            exit_weight_kg: exit_weights.get(i),
            last_weight_date: last_weighings[i],
        });
    }

    Ok(records)
}

fn date_column(frame: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDate>>, StockError> {
    Ok(frame
        .column(name)?
        .as_materialized_series()
        .date()?
        .as_date_iter()
        .collect())
}

fn optional_date_column(
    frame: &DataFrame,
    name: &str,
    height: usize,
) -> Result<Vec<Option<NaiveDate>>, StockError> {
    if frame.column(name).is_ok() {
        date_column(frame, name)
    } else {
        Ok(vec![None; height])
    }
}

fn optional_str_column(
    frame: &DataFrame,
    name: &str,
    height: usize,
) -> Result<Vec<Option<String>>, StockError> {
    match frame.column(name) {
        Ok(column) => Ok(column
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
            .collect()),
        Err(_) => Ok(vec![None; height]),
    }
}
