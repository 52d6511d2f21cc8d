use chrono::NaiveDate;
use core_types::{CoreError, PricePoint, PriceSeries};

fn day(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn point(date: &str, close: f64) -> PricePoint {
    PricePoint {
        date: day(date),
        close,
        volume: None,
    }
}

#[test]
fn builds_a_valid_series() {
    let series = PriceSeries::new(
        "AAPL",
        vec![
            point("2023-01-02", 125.07),
            point("2023-01-03", 126.36),
            point("2023-01-04", 125.02),
        ],
    )
    .expect("valid series");

    assert_eq!(series.symbol(), "AAPL");
    assert_eq!(series.len(), 3);
    assert_eq!(series.first().unwrap().date, day("2023-01-02"));
    assert_eq!(series.last().unwrap().close, 125.02);
}

#[test]
fn rejects_duplicate_dates() {
    let err = PriceSeries::new(
        "AAPL",
        vec![point("2023-01-02", 125.07), point("2023-01-02", 125.44)],
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::UnorderedDates(_, _)));
}

#[test]
fn rejects_unsorted_dates() {
    let err = PriceSeries::new(
        "AAPL",
        vec![point("2023-01-03", 126.36), point("2023-01-02", 125.07)],
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::UnorderedDates(_, _)));
}

#[test]
fn rejects_non_positive_close() {
    let err = PriceSeries::new(
        "AAPL",
        vec![point("2023-01-02", 125.07), point("2023-01-03", 0.0)],
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::InvalidClose(_, _)));
}

#[test]
fn between_keeps_inclusive_bounds() {
    let series = PriceSeries::new(
        "AAPL",
        vec![
            point("2023-01-02", 125.07),
            point("2023-01-03", 126.36),
            point("2023-01-04", 125.02),
            point("2023-01-05", 129.62),
        ],
    )
    .unwrap();

    let window = series.between(Some(day("2023-01-03")), Some(day("2023-01-04")));
    assert_eq!(window.len(), 2);
    assert_eq!(window.first().unwrap().date, day("2023-01-03"));
    assert_eq!(window.last().unwrap().date, day("2023-01-04"));

    // An open bound leaves that side of the window unclipped.
    let tail = series.between(Some(day("2023-01-04")), None);
    assert_eq!(tail.len(), 2);

    let empty = series.between(Some(day("2024-01-01")), None);
    assert!(empty.is_empty());
}
