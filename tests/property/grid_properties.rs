// Property-based tests for heatmap construction
// Checks shape, ordering and coloring laws with random ranges and observations

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use heatmap_calendar::services::color::{bucket_index, ValueBounds};
use heatmap_calendar::{
    build_grid, build_labels, ColorScale, DateRange, HeatmapView, Observation, RangeSpec,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~40 years
    (0i64..14_600).prop_map(|offset| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset))
}

fn range_strategy() -> impl Strategy<Value = DateRange> {
    (date_strategy(), 0i64..800)
        .prop_map(|(start, len)| DateRange::new(start, start + Duration::days(len)).unwrap())
}

fn observations_strategy() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((date_strategy(), -1_000.0f64..1_000.0), 1..40).prop_map(|items| {
        items
            .into_iter()
            .map(|(date, value)| Observation::new(date, value).unwrap())
            .collect()
    })
}

fn scale_strategy() -> impl Strategy<Value = ColorScale> {
    (1usize..10).prop_map(|len| ColorScale::new((0..len).map(|i| format!("#{}", i))))
}

/// Any finite f64, from tiny subnormals up to `f64::MAX` of either sign
fn finite_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6f64..1e6,
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
        prop_oneof![Just(f64::MAX), Just(-f64::MAX), Just(1e308), Just(-1e308)],
    ]
}

fn view_strategy() -> impl Strategy<Value = HeatmapView> {
    prop_oneof![Just(HeatmapView::Month), Just(HeatmapView::Year)]
}

proptest! {
    /// Property: every non-empty grid has 7 equal rows covering whole weeks
    #[test]
    fn prop_grid_is_seven_rows_of_whole_weeks(
        range in range_strategy(),
        observations in observations_strategy(),
        scale in scale_strategy(),
    ) {
        let grid = build_grid(&observations, &RangeSpec::explicit(range), &scale);

        prop_assert_eq!(grid.rows().len(), 7);
        let weeks = grid.week_count();
        prop_assert!(weeks >= 1);
        prop_assert!(grid.rows().iter().all(|row| row.len() == weeks));

        let first = grid.first_date().unwrap();
        let last = grid.last_date().unwrap();
        prop_assert_eq!(first.weekday(), Weekday::Sun);
        prop_assert_eq!(last.weekday(), Weekday::Sat);
        prop_assert!(first <= range.start() && range.end() <= last);
        prop_assert!(range.start() - first < Duration::days(7));
        prop_assert!(last - range.end() < Duration::days(7));
    }

    /// Property: cells run day by day without gaps, weekday rows line up
    #[test]
    fn prop_grid_days_are_contiguous(range in range_strategy()) {
        let grid = build_grid(&[], &RangeSpec::explicit(range), &ColorScale::default());

        let dates: Vec<NaiveDate> = grid.iter_days().map(|c| c.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
        for (weekday, row) in grid.rows().iter().enumerate() {
            for cell in row {
                prop_assert_eq!(cell.date.weekday().num_days_from_sunday() as usize, weekday);
                prop_assert_eq!(cell.month, cell.date.month0());
            }
        }
    }

    /// Property: in-range membership and missing-date values
    #[test]
    fn prop_values_follow_lookup_and_range(
        range in range_strategy(),
        observations in observations_strategy(),
    ) {
        let grid = build_grid(&observations, &RangeSpec::explicit(range), &ColorScale::default());

        let mut expected: HashMap<NaiveDate, f64> = HashMap::new();
        for obs in &observations {
            expected.insert(obs.date, obs.value);
        }

        for cell in grid.iter_days() {
            prop_assert_eq!(cell.in_range, range.contains(cell.date));
            prop_assert_eq!(cell.clickable, cell.in_range);
            let value = if cell.in_range {
                expected.get(&cell.date).copied().unwrap_or(0.0)
            } else {
                0.0
            };
            prop_assert_eq!(cell.value, value);
        }
    }

    /// Property: building twice gives identical output
    #[test]
    fn prop_builder_is_idempotent(
        observations in observations_strategy(),
        view in view_strategy(),
        scale in scale_strategy(),
    ) {
        let spec = RangeSpec::for_view(view, &observations);
        prop_assert_eq!(
            build_grid(&observations, &spec, &scale),
            build_grid(&observations, &spec, &scale)
        );
        prop_assert_eq!(build_labels(&spec), build_labels(&spec));
    }

    /// Property: uniform values color every cell of a view with the last token
    #[test]
    fn prop_uniform_values_use_last_token(
        dates in prop::collection::vec(date_strategy(), 1..20),
        value in -50.0f64..50.0,
        view in view_strategy(),
        scale in scale_strategy(),
    ) {
        let observations: Vec<Observation> = dates
            .into_iter()
            .map(|date| Observation::new(date, value).unwrap())
            .collect();
        let spec = RangeSpec::for_view(view, &observations);
        let grid = build_grid(&observations, &spec, &scale);
        let last = scale.last().unwrap();
        prop_assert!(grid.iter_days().all(|cell| cell.color == last));
    }

    /// Property: bucket index stays in bounds, min → 0, max → N-1
    #[test]
    fn prop_bucket_index_in_bounds(
        a in finite_value(),
        b in finite_value(),
        value in finite_value(),
        len in 1usize..64,
    ) {
        let bounds = ValueBounds::new(a.min(b), a.max(b));
        let index = bucket_index(value, bounds, len).unwrap();
        prop_assert!(index < len);

        if bounds.min < bounds.max {
            prop_assert_eq!(bucket_index(bounds.min, bounds, len), Some(0));
            prop_assert_eq!(bucket_index(bounds.max, bounds, len), Some(len - 1));
        }
    }

    /// Property: labels are strictly increasing, chronological and sampled on Sundays
    #[test]
    fn prop_labels_strictly_increasing(range in range_strategy()) {
        let spec = RangeSpec::explicit(range);
        let labels = build_labels(&spec);
        let grid = build_grid(&[], &spec, &ColorScale::default());

        prop_assert!(!labels.is_empty());
        prop_assert_eq!(labels[0].week_column_index, 0);
        prop_assert!(labels.windows(2).all(|w| w[0].week_column_index < w[1].week_column_index));
        for label in &labels {
            let sunday = grid.cell(0, label.week_column_index).unwrap();
            prop_assert_eq!(sunday.month, label.month);
        }
    }
}
