use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Price series for '{0}' is not strictly date-ordered at {1}")]
    UnorderedDates(String, NaiveDate),

    #[error("Price series for '{0}' has a non-finite or non-positive close at {1}")]
    InvalidClose(String, NaiveDate),
}
