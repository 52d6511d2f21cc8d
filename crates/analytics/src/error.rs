use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Not enough data for '{symbol}': needed {needed} observations, got {got}")]
    InsufficientData {
        symbol: String,
        needed: usize,
        got: usize,
    },

    #[error("No common dates across the requested symbols")]
    NoOverlap,

    #[error("Correlation requires at least two price series, got {0}")]
    NotEnoughSeries(usize),

    #[error("Daily returns for '{0}' have zero variance, so correlation is undefined")]
    ZeroVariance(String),
}
