use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single daily observation for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    /// Shares traded on this date, when the dataset provides a volume column.
    pub volume: Option<u64>,
}

/// The ordered daily price history for one symbol.
///
/// Construction validates the ordering invariants once, so every downstream
/// calculation can rely on strictly increasing dates and valid closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from points already sorted by date.
    ///
    /// Fails if any date repeats or regresses, or if a close is non-finite
    /// or non-positive.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, CoreError> {
        let symbol = symbol.into();
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(CoreError::UnorderedDates(symbol, pair[1].date));
            }
        }
        if let Some(point) = points
            .iter()
            .find(|p| !p.close.is_finite() || p.close <= 0.0)
        {
            return Err(CoreError::InvalidClose(symbol, point.date));
        }
        Ok(Self { symbol, points })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Returns a copy restricted to the inclusive `[from, to]` date window.
    ///
    /// An open bound keeps that side of the series unclipped. Filtering
    /// preserves ordering, so no revalidation is needed.
    pub fn between(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let points = self
            .points
            .iter()
            .filter(|p| from.is_none_or(|d| p.date >= d) && to.is_none_or(|d| p.date <= d))
            .copied()
            .collect();
        Self {
            symbol: self.symbol.clone(),
            points,
        }
    }
}

/// One derived observation: the return over the day ending at `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    /// Fractional change from the previous close.
    pub daily_return: f64,
    /// Compounded fractional change since the start of the source series.
    pub cumulative_return: f64,
}

/// The daily and cumulative returns derived from a `PriceSeries`.
///
/// Always one point shorter than its source: the first date has no
/// prior close to measure against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub symbol: String,
    pub points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    /// The daily returns alone, in date order.
    pub fn daily(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.daily_return).collect()
    }
}
