//! Loading of daily price datasets.
//!
//! This crate turns Kaggle-style CSV exports (`date,ticker,close[,volume]`)
//! into validated `PriceSeries` structs. It is the only crate in the
//! workspace that touches the filesystem; the analytics engine stays pure.

pub mod error;
pub mod loader;

// Re-export the core types to provide a clean public API.
pub use error::DataError;
pub use loader::DataLoader;
