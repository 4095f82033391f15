// Unit tests for grid extents across representative ranges

use chrono::Datelike;
use heatmap_calendar::{build_grid, build_labels, HeatmapView, RangeSpec};
use test_case::test_case;

use crate::fixtures::dates::ymd;
use crate::fixtures::explicit;
use crate::fixtures::scales::abc;

#[test_case("2024-06-09", "2024-06-15", 1; "exact sunday to saturday week")]
#[test_case("2024-06-10", "2024-06-10", 1; "single monday")]
#[test_case("2024-06-15", "2024-06-16", 2; "saturday into sunday")]
#[test_case("2024-12-30", "2025-01-02", 1; "year boundary inside one week")]
#[test_case("2024-01-01", "2024-12-31", 53; "full leap year")]
fn test_explicit_week_counts(start: &str, end: &str, weeks: usize) {
    let grid = build_grid(&[], &explicit(start, end), &abc());
    assert_eq!(grid.week_count(), weeks);
    assert_eq!(grid.rows().len(), 7);
}

#[test_case(2024, 2, 5; "february 2024")]
#[test_case(2015, 2, 4; "february 2015 fits four weeks")]
#[test_case(2024, 6, 6; "june 2024 spans six weeks")]
#[test_case(2024, 9, 5; "september 2024 starts on sunday")]
fn test_month_view_week_counts(year: i32, month: u32, weeks: usize) {
    let spec = RangeSpec::View {
        view: HeatmapView::Month,
        anchor: Some(ymd(year, month, 15)),
    };
    let grid = build_grid(&[], &spec, &abc());
    assert_eq!(grid.week_count(), weeks);

    let first_in_month = grid
        .iter_days()
        .find(|c| c.date.day() == 1 && c.date.month() == month)
        .unwrap();
    assert_eq!(first_in_month.month, month - 1);
}

#[test]
fn test_view_grid_is_built_from_anchor_even_without_values() {
    // A typed anchor is enough: the builder does not need observations
    let spec = RangeSpec::View {
        view: HeatmapView::Month,
        anchor: Some(ymd(2024, 9, 1)),
    };
    let grid = build_grid(&[], &spec, &abc());
    assert!(grid.iter_days().all(|c| c.value == 0.0 && c.color == "#a"));
    assert_eq!(build_labels(&spec).first().map(|l| l.label), Some("Sep"));
}
