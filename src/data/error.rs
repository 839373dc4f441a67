use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning the source CSV into a dataset.
///
/// Row numbers are 1-based data rows; the header line is not counted.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a recognised date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: '{value}' in column '{column}' is not a number")]
    InvalidAmount {
        row: usize,
        column: &'static str,
        value: String,
    },
}
