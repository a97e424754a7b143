// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate};
use thuchi::error::Error;
use thuchi::period::Period;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn range_starts_on_day_one() {
    for month in 1..=12 {
        let (start, _) = Period::new(month, 2024).unwrap().range().unwrap();
        assert_eq!(start.day(), 1);
        assert_eq!(start.month(), month);
    }
}

#[test]
fn december_ends_on_the_31st() {
    let (start, end) = Period::new(12, 2024).unwrap().range().unwrap();
    assert_eq!(start, d(2024, 12, 1));
    assert_eq!(end, d(2024, 12, 31));
}

#[test]
fn february_leap_year_ends_on_the_29th() {
    let (_, end) = Period::new(2, 2024).unwrap().range().unwrap();
    assert_eq!(end, d(2024, 2, 29));
}

#[test]
fn february_common_year_ends_on_the_28th() {
    let (_, end) = Period::new(2, 2023).unwrap().range().unwrap();
    assert_eq!(end, d(2023, 2, 28));
}

#[test]
fn end_plus_one_day_is_the_next_months_start() {
    // Includes the December -> January year rollover
    for month in 1..=12 {
        let p = Period::new(month, 2024).unwrap();
        let (_, end) = p.range().unwrap();
        let next = if month == 12 {
            Period::new(1, 2025).unwrap()
        } else {
            Period::new(month + 1, 2024).unwrap()
        };
        let (next_start, _) = next.range().unwrap();
        assert_eq!(end.checked_add_days(Days::new(1)).unwrap(), next_start);
    }
}

#[test]
fn previous_of_january_is_december_of_the_year_before() {
    let p = Period::new(1, 2024).unwrap().previous();
    assert_eq!(p.month(), 12);
    assert_eq!(p.year(), 2023);
}

#[test]
fn previous_within_the_year_steps_back_one_month() {
    let p = Period::new(7, 2024).unwrap().previous();
    assert_eq!(p.month(), 6);
    assert_eq!(p.year(), 2024);
}

#[test]
fn month_zero_is_rejected() {
    assert!(matches!(Period::new(0, 2024), Err(Error::InvalidArgument(_))));
}

#[test]
fn month_thirteen_is_rejected() {
    assert!(matches!(
        Period::new(13, 2024),
        Err(Error::InvalidArgument(_))
    ));
}
