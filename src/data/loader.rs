//! CSV Data Loader Module
//! Loads the player CSV into an immutable table using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Number of rows read from the source file.
pub const DEFAULT_ROW_LIMIT: usize = 100;

pub const NAME: &str = "Name";
pub const NATIONALITY: &str = "Nationality";
pub const CLUB: &str = "Club";
pub const OVERALL: &str = "Overall";
pub const WAGE: &str = "Wage";

const REQUIRED_COLUMNS: [&str; 5] = [NAME, NATIONALITY, CLUB, OVERALL, WAGE];

/// Columns always held as strings, even when every loaded value looks numeric.
const TEXT_COLUMNS: [&str; 4] = [NAME, NATIONALITY, CLUB, WAGE];

fn text_schema() -> SchemaRef {
    Arc::new(Schema::from_iter(
        TEXT_COLUMNS
            .iter()
            .map(|name| Field::new((*name).into(), DataType::String)),
    ))
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

fn check_required(columns: &[&str]) -> Result<(), LoaderError> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|required| !columns.contains(required))
    {
        Some(missing) => Err(LoaderError::MissingColumn(missing.to_string())),
        None => Ok(()),
    }
}

/// Player records, read-only once loaded.
#[derive(Debug, Clone)]
pub struct PlayerTable {
    df: DataFrame,
}

impl PlayerTable {
    /// Wrap a DataFrame, checking that every required column is present.
    /// Text columns are cast to strings.
    pub fn new(df: DataFrame) -> Result<Self, LoaderError> {
        let columns: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|c| c.as_str())
            .collect();
        check_required(&columns)?;

        let df = df
            .lazy()
            .with_columns(
                TEXT_COLUMNS
                    .iter()
                    .map(|name| col(*name).cast(DataType::String))
                    .collect::<Vec<_>>(),
            )
            .collect()?;

        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// Rows whose `column` equals `value` exactly.
    pub fn filter_eq(&self, column: &str, value: &str) -> PolarsResult<DataFrame> {
        self.lazy_filter_eq(column, value).collect()
    }

    pub(crate) fn lazy_filter_eq(&self, column: &str, value: &str) -> LazyFrame {
        self.df
            .clone()
            .lazy()
            .filter(col(column).eq(lit(value)))
    }
}

/// Reads player CSV files.
pub struct DataLoader;

impl DataLoader {
    /// Load the first `row_limit` rows of a CSV file.
    pub fn load_csv(file_path: &Path, row_limit: usize) -> Result<PlayerTable, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        // Header only: the text-column overwrite needs every column to exist
        let header = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect_schema()?;
        let columns: Vec<&str> = header.iter_names().map(|c| c.as_str()).collect();
        check_required(&columns)?;

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .with_dtype_overwrite(Some(text_schema()))
            .with_n_rows(Some(row_limit))
            .finish()?
            .collect()?;

        tracing::debug!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded player csv"
        );

        PlayerTable::new(df)
    }
}
