use analytics::{AnalyticsEngine, CorrelationMatrix, PriceSummary, SummaryStats};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use configuration::Config;
use data::DataLoader;

/// The main entry point for the Marketlens analytics application.
fn main() -> anyhow::Result<()> {
    // Route diagnostics through the standard RUST_LOG filter.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = configuration::load_config()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &config),
        Commands::Tickers(args) => handle_tickers(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// The computation core of a multi-stock market dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute return statistics and correlations for a price dataset.
    Analyze(AnalyzeArgs),
    /// List the symbols available in a price dataset.
    Tickers(TickersArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the CSV dataset (date,ticker,close[,volume] columns).
    #[arg(long)]
    data: Option<String>,

    /// Symbols to analyze, comma separated. Defaults to every symbol present.
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// Start of the analysis window, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the analysis window, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Emit the full report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct TickersArgs {
    /// Path to the CSV dataset.
    #[arg(long)]
    data: Option<String>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the orchestration of the analyze command: load, filter, compute,
/// render.
fn handle_analyze(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let path = args.data.unwrap_or_else(|| config.data.path.clone());
    let mut series = DataLoader::load_prices(&path)?;

    if !args.symbols.is_empty() {
        for wanted in &args.symbols {
            if !series.iter().any(|s| s.symbol() == wanted.as_str()) {
                anyhow::bail!("symbol '{}' not present in {}", wanted, path);
            }
        }
        series.retain(|s| args.symbols.iter().any(|w| w.as_str() == s.symbol()));
    }

    if args.from.is_some() || args.to.is_some() {
        series = series
            .iter()
            .map(|s| s.between(args.from, args.to))
            .collect();
    }
    for empty in series.iter().filter(|s| s.is_empty()) {
        tracing::warn!(symbol = %empty.symbol(), "no observations in the selected window");
    }
    series.retain(|s| !s.is_empty());
    if series.is_empty() {
        anyhow::bail!("no price data in the selected window");
    }

    let engine = AnalyticsEngine::with_periods_per_year(config.analysis.periods_per_year);

    let mut summaries = Vec::with_capacity(series.len());
    let mut prices = Vec::with_capacity(series.len());
    for s in &series {
        summaries.push(engine.compute_summary(s)?);
        prices.push(engine.price_summary(s)?);
    }

    // The correlation matrix only makes sense across two or more symbols.
    let correlation = if series.len() >= 2 {
        Some(engine.compute_correlation(&series)?)
    } else {
        None
    };

    if args.json {
        let report = serde_json::json!({
            "summary_stats": summaries,
            "price_summaries": prices,
            "correlation": correlation,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary_table(&summaries, &prices);
    if let Some(matrix) = &correlation {
        print_correlation_table(matrix);
    }
    Ok(())
}

fn handle_tickers(args: TickersArgs, config: &Config) -> anyhow::Result<()> {
    let path = args.data.unwrap_or_else(|| config.data.path.clone());
    for ticker in DataLoader::list_tickers(&path)? {
        println!("{ticker}");
    }
    Ok(())
}

// ==============================================================================
// Table Rendering
// ==============================================================================

fn print_summary_table(summaries: &[SummaryStats], prices: &[PriceSummary]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Symbol", "Latest", "Change %", "Mean Ret", "Daily Vol", "Ann. Vol", "Max DD %", "Volume",
    ]);
    for (stats, price) in summaries.iter().zip(prices) {
        table.add_row(vec![
            Cell::new(&stats.symbol),
            Cell::new(format!("{:.2}", price.latest_close)),
            Cell::new(format!("{:+.2}", price.change_pct)),
            Cell::new(format!("{:.5}", stats.mean_daily_return)),
            Cell::new(format!("{:.5}", stats.daily_volatility)),
            Cell::new(format!("{:.4}", stats.annualized_volatility)),
            Cell::new(format!("{:.2}", stats.max_drawdown * 100.0)),
            Cell::new(
                price
                    .total_volume
                    .map_or_else(|| "-".to_string(), |v| v.to_string()),
            ),
        ]);
    }
    println!("{table}");
}

fn print_correlation_table(matrix: &CorrelationMatrix) {
    let mut table = Table::new();
    let mut header = vec![Cell::new("Correlation")];
    header.extend(matrix.symbols().iter().map(Cell::new));
    table.load_preset(UTF8_FULL).set_header(header);
    for (symbol, row) in matrix.symbols().iter().zip(matrix.values()) {
        let mut cells = vec![Cell::new(symbol)];
        cells.extend(row.iter().map(|v| Cell::new(format!("{v:.3}"))));
        table.add_row(cells);
    }
    println!("{table}");
}
