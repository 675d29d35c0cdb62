use crate::lib_test::{day, dt, init_test};
use rat_picker::range::is_in_range;
use rat_picker::{DateBounds, RangePolicy};

mod lib_test;

#[test]
fn test_unbounded() -> Result<(), anyhow::Error> {
    init_test("test_range")?;

    let bounds = DateBounds::default();
    assert!(bounds.is_unbounded());
    assert!(bounds.contains(day(1, 1, 1), RangePolicy::DayInclusive));
    assert!(bounds.contains(day(9999, 12, 31), RangePolicy::MaxExclusive));
    Ok(())
}

#[test]
fn test_day_inclusive() -> Result<(), anyhow::Error> {
    init_test("test_range")?;

    let bounds = DateBounds::new(Some(dt(2024, 1, 10, 12, 0)), Some(dt(2024, 1, 20, 8, 0)));
    let p = RangePolicy::DayInclusive;

    // same day as min or max is fine, whatever the time.
    assert!(bounds.contains(day(2024, 1, 10), p));
    assert!(bounds.contains(dt(2024, 1, 20, 23, 59), p));
    assert!(bounds.contains(day(2024, 1, 15), p));
    assert!(!bounds.contains(dt(2024, 1, 9, 23, 59), p));
    assert!(!bounds.contains(day(2024, 1, 21), p));

    assert!(bounds.day_selectable(day(2024, 1, 10).date(), p));
    assert!(bounds.day_selectable(day(2024, 1, 20).date(), p));
    assert!(!bounds.day_selectable(day(2024, 1, 21).date(), p));
    Ok(())
}

#[test]
fn test_max_exclusive() -> Result<(), anyhow::Error> {
    init_test("test_range")?;

    let bounds = DateBounds::new(Some(dt(2024, 1, 10, 12, 0)), Some(day(2024, 1, 20)));
    let p = RangePolicy::MaxExclusive;

    assert!(bounds.contains(dt(2024, 1, 10, 12, 0), p));
    assert!(!bounds.contains(dt(2024, 1, 10, 11, 59), p));
    assert!(!bounds.contains(day(2024, 1, 10), p));
    assert!(bounds.contains(dt(2024, 1, 19, 23, 59), p));
    assert!(!bounds.contains(day(2024, 1, 20), p));

    assert!(is_in_range(day(2024, 1, 15), &bounds, p));
    assert!(!is_in_range(day(2024, 1, 20), &bounds, p));
    Ok(())
}

#[test]
fn test_month_year_selectable() -> Result<(), anyhow::Error> {
    init_test("test_range")?;

    let bounds = DateBounds::default()
        .with_min(day(2024, 3, 31))
        .with_max(day(2025, 2, 1));

    let p = RangePolicy::DayInclusive;
    assert!(!bounds.month_selectable(2024, 1, p));
    assert!(bounds.month_selectable(2024, 2, p));
    assert!(bounds.month_selectable(2025, 1, p));
    assert!(!bounds.month_selectable(2025, 2, p));
    assert!(!bounds.month_selectable(2024, 12, p));
    assert!(bounds.year_selectable(2024, p));
    assert!(bounds.year_selectable(2025, p));
    assert!(!bounds.year_selectable(2023, p));
    assert!(!bounds.year_start_selectable(2024, p));
    assert!(bounds.year_start_selectable(2025, p));

    // max at midnight excludes that day.
    let p = RangePolicy::MaxExclusive;
    assert!(bounds.month_selectable(2025, 0, p));
    assert!(!bounds.month_selectable(2025, 1, p));

    // min with a time excludes the midnight of its own day.
    let bounds = DateBounds::default().with_min(dt(2024, 3, 31, 9, 0));
    assert!(!bounds.month_selectable(2024, 2, p));
    assert!(bounds.month_selectable(2024, 2, RangePolicy::DayInclusive));
    Ok(())
}

#[test]
fn test_inverted_bounds() -> Result<(), anyhow::Error> {
    init_test("test_range")?;

    // not detected, nothing is admissible.
    let bounds = DateBounds::new(Some(day(2024, 6, 1)), Some(day(2024, 5, 1)));
    assert!(!bounds.contains(day(2024, 5, 15), RangePolicy::DayInclusive));
    assert!(!bounds.year_selectable(2024, RangePolicy::DayInclusive));
    Ok(())
}
