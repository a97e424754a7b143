// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use thuchi::error::Error;
use thuchi::models::Category;
use thuchi::period::Period;
use thuchi::{db, report};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn seed_january_expenses(conn: &Connection) {
    db::insert_expense(conn, "Rent", 1_000_000, d(2024, 1, 5), Category::MustHave).unwrap();
    db::insert_expense(conn, "Cinema", 500_000, d(2024, 1, 10), Category::NiceToHave).unwrap();
    db::insert_expense(conn, "Lottery", 200_000, d(2024, 1, 20), Category::Wasted).unwrap();
}

#[test]
fn breakdown_sums_each_category() {
    let conn = setup();
    seed_january_expenses(&conn);

    let b = report::month_breakdown(&conn, Period::new(1, 2024).unwrap()).unwrap();
    assert_eq!(b.must_have, 1_000_000);
    assert_eq!(b.nice_to_have, 500_000);
    assert_eq!(b.wasted, 200_000);
    assert_eq!(b.total, 1_700_000);
}

#[test]
fn breakdown_total_equals_category_sum() {
    let conn = setup();
    seed_january_expenses(&conn);
    db::insert_expense(&conn, "Groceries", 321_000, d(2024, 1, 2), Category::MustHave).unwrap();
    db::insert_expense(&conn, "Snacks", 45_500, d(2024, 1, 28), Category::Wasted).unwrap();

    let b = report::month_breakdown(&conn, Period::new(1, 2024).unwrap()).unwrap();
    assert_eq!(b.total, b.must_have + b.nice_to_have + b.wasted);
}

#[test]
fn breakdown_ignores_neighboring_months() {
    let conn = setup();
    seed_january_expenses(&conn);
    db::insert_expense(&conn, "Dec rent", 900_000, d(2023, 12, 31), Category::MustHave).unwrap();
    db::insert_expense(&conn, "Feb rent", 900_000, d(2024, 2, 1), Category::MustHave).unwrap();

    let b = report::month_breakdown(&conn, Period::new(1, 2024).unwrap()).unwrap();
    assert_eq!(b.must_have, 1_000_000);
}

#[test]
fn living_standard_derives_from_breakdown_alone() {
    let conn = setup();
    seed_january_expenses(&conn);

    let b = report::month_breakdown(&conn, Period::new(1, 2024).unwrap()).unwrap();
    let ls = report::living_standard(&b);
    assert_eq!(ls.minimum, 1_000_000);
    assert_eq!(ls.standard, 1_500_000);
    assert_eq!(ls.total_expense, 1_700_000);
}

#[test]
fn comparison_against_an_empty_previous_month() {
    let conn = setup();
    seed_january_expenses(&conn);

    let cmp = report::comparison(&conn, Period::new(1, 2024).unwrap()).unwrap();
    assert_eq!(cmp.previous.total, 0);
    assert_eq!(cmp.delta.must_have, 1_000_000);
    assert_eq!(cmp.delta.nice_to_have, 500_000);
    assert_eq!(cmp.delta.wasted, 200_000);
}

#[test]
fn comparison_delta_is_current_minus_previous() {
    let conn = setup();
    seed_january_expenses(&conn);
    db::insert_expense(&conn, "Dec rent", 1_200_000, d(2023, 12, 3), Category::MustHave).unwrap();
    db::insert_expense(&conn, "Dec cinema", 100_000, d(2023, 12, 9), Category::NiceToHave).unwrap();

    let cmp = report::comparison(&conn, Period::new(1, 2024).unwrap()).unwrap();
    assert_eq!(cmp.delta.must_have, 1_000_000 - 1_200_000);
    assert_eq!(cmp.delta.nice_to_have, 500_000 - 100_000);
    assert_eq!(cmp.delta.wasted, 200_000);
    assert_eq!(
        cmp.delta.must_have,
        cmp.current.must_have - cmp.previous.must_have
    );
}

#[test]
fn trend_walks_back_three_months_oldest_first() {
    let conn = setup();
    db::insert_income(&conn, "Salary Nov", 8_000_000, d(2023, 11, 25)).unwrap();
    db::insert_income(&conn, "Salary Dec", 9_000_000, d(2023, 12, 25)).unwrap();
    db::insert_income(&conn, "Salary Jan", 10_000_000, d(2024, 1, 25)).unwrap();
    db::insert_income(&conn, "Bonus Jan", 2_000_000, d(2024, 1, 31)).unwrap();

    let points = report::income_trend(&conn, Period::new(1, 2024).unwrap(), 3).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].period, Period::new(11, 2023).unwrap());
    assert_eq!(points[0].total, 8_000_000);
    assert_eq!(points[1].total, 9_000_000);
    assert_eq!(points[2].period, Period::new(1, 2024).unwrap());
    assert_eq!(points[2].total, 12_000_000);
}

#[test]
fn trend_last_point_matches_the_months_income_sum() {
    let conn = setup();
    db::insert_income(&conn, "Salary", 10_000_000, d(2024, 1, 25)).unwrap();

    let points = report::income_trend(&conn, Period::new(1, 2024).unwrap(), 3).unwrap();
    let (start, end) = Period::new(1, 2024).unwrap().range().unwrap();
    assert_eq!(
        points.last().unwrap().total,
        db::sum_incomes(&conn, start, end).unwrap()
    );
}

#[test]
fn trend_rejects_zero_periods() {
    let conn = setup();
    let err = report::income_trend(&conn, Period::new(1, 2024).unwrap(), 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn trend_length_is_exactly_the_requested_periods() {
    let conn = setup();
    let points = report::income_trend(&conn, Period::new(3, 2024).unwrap(), 6).unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(points[0].period, Period::new(10, 2023).unwrap());
}

#[test]
fn shares_sum_to_exactly_one_hundred() {
    let conn = setup();
    // Thirds produce repeating decimals in the first two shares
    db::insert_expense(&conn, "A", 1_000, d(2024, 1, 1), Category::MustHave).unwrap();
    db::insert_expense(&conn, "B", 1_000, d(2024, 1, 2), Category::NiceToHave).unwrap();
    db::insert_expense(&conn, "C", 1_000, d(2024, 1, 3), Category::Wasted).unwrap();

    let b = report::month_breakdown(&conn, Period::new(1, 2024).unwrap()).unwrap();
    let s = report::category_shares(&b);
    assert_eq!(s.must_have + s.nice_to_have + s.wasted, 100.0);
    assert_eq!(s.wasted, 100.0 - s.must_have - s.nice_to_have);
}

#[test]
fn shares_of_an_empty_month_are_all_zero() {
    let conn = setup();
    let b = report::month_breakdown(&conn, Period::new(1, 2024).unwrap()).unwrap();
    let s = report::category_shares(&b);
    assert_eq!(s.must_have, 0.0);
    assert_eq!(s.nice_to_have, 0.0);
    assert_eq!(s.wasted, 0.0);
}

#[test]
fn breakdown_is_stable_without_intervening_writes() {
    let conn = setup();
    seed_january_expenses(&conn);

    let period = Period::new(1, 2024).unwrap();
    let first = report::month_breakdown(&conn, period).unwrap();
    let second = report::month_breakdown(&conn, period).unwrap();
    assert_eq!(first, second);
}
