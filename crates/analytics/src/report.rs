use serde::{Deserialize, Serialize};

/// Per-symbol return and risk statistics.
///
/// This struct is the main output of the `AnalyticsEngine` and serves as the
/// data transfer object for statistics throughout the rest of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub symbol: String,
    /// Sample mean of the daily returns.
    pub mean_daily_return: f64,
    /// Sample standard deviation of the daily returns.
    pub daily_volatility: f64,
    /// Daily volatility scaled by sqrt(periods per year).
    pub annualized_volatility: f64,
    /// Largest peak-to-trough decline of the close price, as a fraction <= 0.
    pub max_drawdown: f64,
}

/// Descriptive price statistics for a symbol over the analyzed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub symbol: String,
    pub latest_close: f64,
    /// Percent change from the first to the last close of the window.
    pub change_pct: f64,
    pub mean_close: f64,
    pub min_close: f64,
    pub max_close: f64,
    /// Total shares traded, when the dataset carries volume.
    pub total_volume: Option<u64>,
}

/// A symmetric matrix of pairwise Pearson correlations of daily returns.
///
/// Rows and columns follow the order of `symbols`; the diagonal is
/// exactly 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    symbols: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub(crate) fn new(symbols: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        Self { symbols, values }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Looks up the coefficient for a pair of symbols.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.symbols.iter().position(|s| s == a)?;
        let j = self.symbols.iter().position(|s| s == b)?;
        Some(self.values[i][j])
    }
}
