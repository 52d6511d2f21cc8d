use std::collections::BTreeSet;

use chrono::NaiveDate;
use core_types::{PricePoint, PriceSeries, ReturnPoint, ReturnSeries};

use crate::error::AnalyticsError;
use crate::report::{CorrelationMatrix, PriceSummary, SummaryStats};

/// Trading days per year, the conventional factor for annualizing
/// daily volatility.
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 252;

/// A stateless calculator for deriving return and risk metrics from
/// price history.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine {
    periods_per_year: u32,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
        }
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the annualization factor, e.g. for weekly data.
    pub fn with_periods_per_year(periods_per_year: u32) -> Self {
        Self { periods_per_year }
    }

    /// Derives daily and cumulative returns from a price series.
    ///
    /// The result has exactly one point fewer than the source: the first
    /// date has no prior close to measure against.
    pub fn compute_returns(&self, series: &PriceSeries) -> Result<ReturnSeries, AnalyticsError> {
        if series.len() < 2 {
            return Err(AnalyticsError::InsufficientData {
                symbol: series.symbol().to_string(),
                needed: 2,
                got: series.len(),
            });
        }

        let mut points = Vec::with_capacity(series.len() - 1);
        let mut compounded = 1.0;
        for pair in series.points().windows(2) {
            let daily = pair[1].close / pair[0].close - 1.0;
            compounded *= 1.0 + daily;
            points.push(ReturnPoint {
                date: pair[1].date,
                daily_return: daily,
                cumulative_return: compounded - 1.0,
            });
        }

        Ok(ReturnSeries {
            symbol: series.symbol().to_string(),
            points,
        })
    }

    /// Computes per-symbol return statistics and the maximum drawdown.
    ///
    /// The sample standard deviation needs at least two daily returns,
    /// so the series must hold at least three observations. Drawdown is
    /// measured on the closes themselves, not on returns.
    pub fn compute_summary(&self, series: &PriceSeries) -> Result<SummaryStats, AnalyticsError> {
        if series.len() < 3 {
            return Err(AnalyticsError::InsufficientData {
                symbol: series.symbol().to_string(),
                needed: 3,
                got: series.len(),
            });
        }

        let returns = self.compute_returns(series)?;
        let daily = returns.daily();
        let mean = mean(&daily);
        let volatility = sample_std_dev(&daily, mean);

        Ok(SummaryStats {
            symbol: series.symbol().to_string(),
            mean_daily_return: mean,
            daily_volatility: volatility,
            annualized_volatility: volatility * (self.periods_per_year as f64).sqrt(),
            max_drawdown: max_drawdown(series.points()),
        })
    }

    /// Computes descriptive price statistics over the series window.
    pub fn price_summary(&self, series: &PriceSeries) -> Result<PriceSummary, AnalyticsError> {
        let (first, last) = match (series.first(), series.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(AnalyticsError::InsufficientData {
                    symbol: series.symbol().to_string(),
                    needed: 1,
                    got: 0,
                });
            }
        };

        let closes = series.points().iter().map(|p| p.close);
        let sum: f64 = closes.clone().sum();
        let min = closes.clone().fold(f64::INFINITY, f64::min);
        let max = closes.fold(f64::NEG_INFINITY, f64::max);

        // Volume columns are optional in Kaggle exports; only report a total
        // when at least one row carried one.
        let total_volume = series
            .points()
            .iter()
            .filter_map(|p| p.volume)
            .fold(None, |acc: Option<u64>, v| Some(acc.unwrap_or(0) + v));

        Ok(PriceSummary {
            symbol: series.symbol().to_string(),
            latest_close: last.close,
            change_pct: (last.close / first.close - 1.0) * 100.0,
            mean_close: sum / series.len() as f64,
            min_close: min,
            max_close: max,
            total_volume,
        })
    }

    /// Computes the pairwise Pearson correlation of daily returns.
    ///
    /// All series are first aligned to their common date intersection so
    /// the coefficients compare like with like. The matrix is symmetric
    /// and its diagonal is exactly 1.0.
    pub fn compute_correlation(
        &self,
        series: &[PriceSeries],
    ) -> Result<CorrelationMatrix, AnalyticsError> {
        if series.len() < 2 {
            return Err(AnalyticsError::NotEnoughSeries(series.len()));
        }

        let aligned = aligned_closes(series)?;
        tracing::debug!(
            symbols = series.len(),
            common_dates = aligned[0].len(),
            "aligned series for correlation"
        );

        let returns: Vec<Vec<f64>> = aligned.iter().map(|closes| daily_returns(closes)).collect();
        for (s, r) in series.iter().zip(&returns) {
            if variance_is_zero(r) {
                return Err(AnalyticsError::ZeroVariance(s.symbol().to_string()));
            }
        }

        let n = series.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                // Identical return streams are perfectly correlated; skip
                // the floating-point round trip.
                let coefficient = if returns[i] == returns[j] {
                    1.0
                } else {
                    pearson(&returns[i], &returns[j])
                };
                values[i][j] = coefficient;
                values[j][i] = coefficient;
            }
        }

        let symbols = series.iter().map(|s| s.symbol().to_string()).collect();
        Ok(CorrelationMatrix::new(symbols, values))
    }
}

/// Restricts every series to the dates present in all of them.
///
/// Fails with `NoOverlap` when the intersection is empty, and with
/// `InsufficientData` when it is too short to yield two daily returns.
fn aligned_closes(series: &[PriceSeries]) -> Result<Vec<Vec<f64>>, AnalyticsError> {
    let mut common: BTreeSet<NaiveDate> = series[0].points().iter().map(|p| p.date).collect();
    for s in &series[1..] {
        let dates: BTreeSet<NaiveDate> = s.points().iter().map(|p| p.date).collect();
        common = common.intersection(&dates).copied().collect();
    }

    if common.is_empty() {
        return Err(AnalyticsError::NoOverlap);
    }
    if common.len() < 3 {
        let symbols: Vec<&str> = series.iter().map(|s| s.symbol()).collect();
        return Err(AnalyticsError::InsufficientData {
            symbol: symbols.join(", "),
            needed: 3,
            got: common.len(),
        });
    }

    Ok(series
        .iter()
        .map(|s| {
            s.points()
                .iter()
                .filter(|p| common.contains(&p.date))
                .map(|p| p.close)
                .collect()
        })
        .collect())
}

fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n-1) standard deviation. Callers guarantee `values.len() >= 2`.
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// The minimum over time of `close / running_peak - 1`, a fraction <= 0.
fn max_drawdown(points: &[PricePoint]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for point in points {
        peak = peak.max(point.close);
        worst = worst.min(point.close / peak - 1.0);
    }
    worst
}

fn variance_is_zero(values: &[f64]) -> bool {
    let m = mean(values);
    values.iter().all(|v| *v == m)
}

/// Pearson correlation of two equal-length samples with non-zero variance.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let mx = mean(x);
    let my = mean(y);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    // Rounding can push the ratio a hair outside the valid range.
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}
