use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use core_types::{PricePoint, PriceSeries};

use crate::error::DataError;

/// One row of a Kaggle-style daily price export.
///
/// Extra columns (open, high, low, adjusted close, ...) are ignored.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    date: NaiveDate,
    ticker: String,
    close: f64,
    #[serde(default)]
    volume: Option<u64>,
}

pub struct DataLoader;

impl DataLoader {
    /// Loads every symbol in the dataset as a validated `PriceSeries`.
    ///
    /// Rows may arrive in any order; each symbol's history is sorted by
    /// date before validation. The output is sorted by symbol so callers
    /// see deterministic ordering.
    pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<Vec<PriceSeries>, DataError> {
        let mut rdr = Self::open(&path)?;
        let headers = Self::normalized_headers(&mut rdr)?;

        let mut by_ticker: BTreeMap<String, Vec<PricePoint>> = BTreeMap::new();
        for result in rdr.records() {
            let record = result?;
            let row: PriceRecord = record.deserialize(Some(&headers))?;
            by_ticker.entry(row.ticker).or_default().push(PricePoint {
                date: row.date,
                close: row.close,
                volume: row.volume,
            });
        }
        if by_ticker.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut series = Vec::with_capacity(by_ticker.len());
        for (ticker, mut points) in by_ticker {
            points.sort_by_key(|p| p.date);
            if let Some(pair) = points.windows(2).find(|w| w[1].date == w[0].date) {
                return Err(DataError::DuplicateDate(ticker, pair[0].date));
            }
            tracing::debug!(ticker = %ticker, rows = points.len(), "loaded price history");
            series.push(PriceSeries::new(ticker, points)?);
        }
        Ok(series)
    }

    /// Lists the distinct tickers in the dataset, sorted.
    pub fn list_tickers<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DataError> {
        let mut rdr = Self::open(&path)?;
        let headers = Self::normalized_headers(&mut rdr)?;

        let mut tickers = std::collections::BTreeSet::new();
        for result in rdr.records() {
            let record = result?;
            let row: PriceRecord = record.deserialize(Some(&headers))?;
            tickers.insert(row.ticker);
        }
        Ok(tickers.into_iter().collect())
    }

    fn open<P: AsRef<Path>>(path: P) -> Result<csv::Reader<std::fs::File>, DataError> {
        Ok(ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?)
    }

    /// Verifies the required columns and lowercases the header row, so
    /// `Date,Ticker,Close` exports deserialize the same as lowercase ones.
    fn normalized_headers(rdr: &mut csv::Reader<std::fs::File>) -> Result<StringRecord, DataError> {
        let headers = rdr.headers()?.clone();
        for required in ["date", "ticker", "close"] {
            if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
                return Err(DataError::MissingColumn(required.to_string()));
            }
        }
        Ok(headers.iter().map(|h| h.to_ascii_lowercase()).collect())
    }
}
