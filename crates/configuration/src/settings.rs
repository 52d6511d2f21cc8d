use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub data: Data,
}

/// Contains parameters for the statistics calculations.
#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    /// Trading days per year, used to annualize daily volatility.
    /// 252 is the convention for US equities.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            periods_per_year: default_periods_per_year(),
        }
    }
}

/// Contains parameters for locating the price dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Data {
    /// The dataset consulted when `--data` is not given on the command line.
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_periods_per_year() -> u32 {
    252
}

fn default_data_path() -> String {
    "data/prices.csv".to_string()
}
