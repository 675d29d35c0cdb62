use crate::lib_test::{day, dt, init_test};
use chrono::Datelike;
use rat_picker::date_util::{
    add_months, add_years, days_in_month, first_weekday_of_month, is_leap_year, same_day,
    shift_months, start_of_day, start_of_year, with_month0, with_year,
};

mod lib_test;

#[test]
fn test_days_in_month() -> Result<(), anyhow::Error> {
    init_test("test_date_util")?;

    assert_eq!(days_in_month(2023, 1), 31);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 4), 30);
    assert_eq!(days_in_month(2023, 12), 31);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);

    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2100));

    for year in 1999..2030 {
        for month in 1..=12 {
            let n = days_in_month(year, month);
            assert!((28..=31).contains(&n));
            let next = shift_months(day(year, month, 1), 1);
            assert_eq!(
                next.signed_duration_since(day(year, month, 1)).num_days(),
                n as i64
            );
        }
    }
    Ok(())
}

#[test]
fn test_first_weekday() -> Result<(), anyhow::Error> {
    init_test("test_date_util")?;

    // 2024-03-01 is a Friday, 2023-01-01 a Sunday.
    assert_eq!(first_weekday_of_month(2024, 3), 5);
    assert_eq!(first_weekday_of_month(2023, 1), 0);
    assert_eq!(first_weekday_of_month(2024, 9), 0);
    assert_eq!(first_weekday_of_month(2024, 4), 1);
    Ok(())
}

#[test]
fn test_add_months_overflow() -> Result<(), anyhow::Error> {
    init_test("test_date_util")?;

    assert_eq!(add_months(day(2023, 1, 31), 1), day(2023, 3, 3));
    assert_eq!(add_months(day(2024, 1, 31), 1), day(2024, 3, 2));
    assert_eq!(add_months(dt(2024, 5, 15, 13, 45), -5), dt(2023, 12, 15, 13, 45));
    assert_eq!(add_months(day(2024, 3, 31), -1), day(2024, 3, 2));
    assert_eq!(add_months(day(2024, 12, 10), 1), day(2025, 1, 10));
    assert_eq!(add_years(day(2024, 2, 29), 1), day(2025, 3, 1));
    assert_eq!(add_years(day(2024, 7, 4), -4), day(2020, 7, 4));
    Ok(())
}

#[test]
fn test_add_months_year() -> Result<(), anyhow::Error> {
    init_test("test_date_util")?;

    // twelve months is one year, for every day that exists in both.
    let mut d = day(2023, 1, 1);
    while d.year() == 2023 {
        assert_eq!(add_months(d, 12), add_years(d, 1));
        assert_eq!(add_months(d, 12).year(), 2024);
        d += chrono::Duration::days(1);
    }
    Ok(())
}

#[test]
fn test_shift_months_clamp() -> Result<(), anyhow::Error> {
    init_test("test_date_util")?;

    assert_eq!(shift_months(day(2023, 1, 31), 1), day(2023, 2, 28));
    assert_eq!(shift_months(day(2024, 1, 31), 1), day(2024, 2, 29));
    assert_eq!(shift_months(day(2024, 3, 31), -1), day(2024, 2, 29));
    assert_eq!(shift_months(dt(2024, 1, 15, 8, 5), -13), dt(2022, 12, 15, 8, 5));

    assert_eq!(with_year(day(2024, 2, 29), 2023), day(2023, 2, 28));
    assert_eq!(with_month0(day(2024, 3, 31), 3), day(2024, 4, 30));
    assert_eq!(with_month0(day(2024, 3, 31), 12), day(2024, 3, 31));
    Ok(())
}

#[test]
fn test_day_helpers() -> Result<(), anyhow::Error> {
    init_test("test_date_util")?;

    assert!(same_day(dt(2024, 3, 15, 0, 0), dt(2024, 3, 15, 23, 59)));
    assert!(!same_day(dt(2024, 3, 15, 23, 59), dt(2024, 3, 16, 0, 0)));
    assert_eq!(start_of_day(dt(2024, 3, 15, 10, 30)), day(2024, 3, 15));
    assert_eq!(start_of_year(1999), Some(day(1999, 1, 1)));
    Ok(())
}
