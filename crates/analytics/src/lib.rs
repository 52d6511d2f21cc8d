//! # Marketlens Analytics Engine
//!
//! This crate provides the tools for deriving return and risk statistics from
//! stock price history. It acts as the computational core of the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It borrows immutable price series as input and produces
//!   report structs as output. This makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `SummaryStats`, `PriceSummary`, `CorrelationMatrix`: the standardized
//!   output structs consumed by the presentation layer.
//! - `AnalyticsError`: The specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, DEFAULT_PERIODS_PER_YEAR};
pub use error::AnalyticsError;
pub use report::{CorrelationMatrix, PriceSummary, SummaryStats};
