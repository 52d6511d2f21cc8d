use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Duplicate row for '{0}' on {1}")]
    DuplicateDate(String, NaiveDate),

    #[error("The dataset contains no rows")]
    EmptyDataset,

    #[error(transparent)]
    Series(#[from] core_types::CoreError),
}
