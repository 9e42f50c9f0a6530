//! CSV loader for contribution-base history.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is trimmed.
//!
//! | Column         | Type    | Notes |
//! |----------------|---------|-------|
//! | `year`         | integer | calendar year, e.g. `2024` |
//! | `monthly_base` | decimal | monthly contribution base, non-negative |
//!
//! Rows may appear in any order; the loader returns them most recent year
//! first, which is the order the engine expects.
//!
//! ```csv
//! year,monthly_base
//! 2024,2081.00
//! 2023,2010.50
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use pension_core::ContributionBase;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading contribution bases.
#[derive(Debug, Error)]
pub enum BaseLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `row` is 1-based (header = row 0).
    #[error("year {year} appears more than once (row {row})")]
    DuplicateYear { year: i32, row: usize },

    #[error("negative monthly base {monthly_base} for year {year} (row {row})")]
    NegativeBase {
        year: i32,
        monthly_base: Decimal,
        row: usize,
    },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: i32,
    monthly_base: Decimal,
}

/// Loader for contribution-base CSV files.
pub struct ContributionBaseLoader;

impl ContributionBaseLoader {
    /// Parses bases from any reader and returns them newest first.
    ///
    /// # Errors
    ///
    /// * [`BaseLoadError::Parse`] if the CSV is malformed or a cell has the wrong type.
    /// * [`BaseLoadError::DuplicateYear`] if a year repeats.
    /// * [`BaseLoadError::NegativeBase`] if a monthly base is below zero.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ContributionBase>, BaseLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut bases = Vec::new();

        for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
            let row = result?;
            let row_number = idx + 1;

            if row.monthly_base < Decimal::ZERO {
                return Err(BaseLoadError::NegativeBase {
                    year: row.year,
                    monthly_base: row.monthly_base,
                    row: row_number,
                });
            }
            if !seen.insert(row.year) {
                return Err(BaseLoadError::DuplicateYear {
                    year: row.year,
                    row: row_number,
                });
            }

            bases.push(ContributionBase {
                year: row.year,
                monthly_base: row.monthly_base,
            });
        }

        bases.sort_by(|a, b| b.year.cmp(&a.year));
        debug!(years = bases.len(), "loaded contribution bases");
        Ok(bases)
    }

    pub fn load_from_str(input: &str) -> Result<Vec<ContributionBase>, BaseLoadError> {
        Self::parse(input.as_bytes())
    }

    /// Reads a CSV file from disk and delegates to [`ContributionBaseLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<ContributionBase>, BaseLoadError> {
        let file = std::fs::File::open(path).map_err(|source| BaseLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }
}
