use data::{DataError, DataLoader};

#[test]
fn loads_series_grouped_and_sorted_by_symbol() {
    let series = DataLoader::load_prices("tests/data/sample_prices.csv")
        .expect("failed to load sample data");

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].symbol(), "AAPL");
    assert_eq!(series[1].symbol(), "NFLX");
    assert_eq!(series[0].len(), 3);
    assert_eq!(series[1].len(), 3);

    // Capitalized Kaggle headers (Date, Ticker, Close, Volume) must parse.
    let first = series[0].first().unwrap();
    assert_eq!(first.close, 125.07);
    assert_eq!(first.volume, Some(112_117_500));
}

#[test]
fn lists_distinct_tickers_sorted() {
    let tickers =
        DataLoader::list_tickers("tests/data/sample_prices.csv").expect("failed to list tickers");
    assert_eq!(tickers, vec!["AAPL".to_string(), "NFLX".to_string()]);
}

#[test]
fn missing_close_column_is_rejected() {
    let err = DataLoader::load_prices("tests/data/missing_close.csv").unwrap_err();
    match err {
        DataError::MissingColumn(column) => assert_eq!(column, "close"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_dates_are_rejected() {
    let err = DataLoader::load_prices("tests/data/duplicate_date.csv").unwrap_err();
    assert!(matches!(err, DataError::DuplicateDate(_, _)));
}
