// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::models::Category;
use crate::utils::{fmt_vnd, group_thousands, maybe_print_json, pretty_table};
use crate::{db, report};

use super::category_label;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(conn, sub)?,
        Some(("compare", sub)) => compare(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        Some(("summary", sub)) => summary(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct MonthReport {
    breakdown: report::MonthBreakdown,
    living_standard: report::LivingStandard,
    shares: report::CategoryShares,
}

fn month(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = super::period_from_args(sub)?;

    let breakdown = report::month_breakdown(conn, period)?;
    let living_standard = report::living_standard(&breakdown);
    let shares = report::category_shares(&breakdown);

    let out = MonthReport {
        breakdown,
        living_standard,
        shares,
    };
    if maybe_print_json(json_flag, jsonl_flag, &out)? {
        return Ok(());
    }

    let b = &out.breakdown;
    let rows = vec![
        vec![
            category_label(Category::MustHave).into(),
            fmt_vnd(b.must_have),
            format!("{:.1}%", out.shares.must_have),
        ],
        vec![
            category_label(Category::NiceToHave).into(),
            fmt_vnd(b.nice_to_have),
            format!("{:.1}%", out.shares.nice_to_have),
        ],
        vec![
            category_label(Category::Wasted).into(),
            fmt_vnd(b.wasted),
            format!("{:.1}%", out.shares.wasted),
        ],
        vec!["TOTAL".into(), fmt_vnd(b.total), String::new()],
    ];
    println!("Expenses {}", period);
    println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    println!(
        "Minimum standard of living: {}",
        fmt_vnd(out.living_standard.minimum)
    );
    println!(
        "Standard of living:         {}",
        fmt_vnd(out.living_standard.standard)
    );
    println!(
        "Expense in month:           {}",
        fmt_vnd(out.living_standard.total_expense)
    );
    Ok(())
}

/// Increases are shown with a leading '+': more spending than last month.
fn fmt_delta(delta: i64) -> String {
    match delta.cmp(&0) {
        std::cmp::Ordering::Greater => format!("+ {} VNĐ", group_thousands(delta)),
        std::cmp::Ordering::Less => format!("- {} VNĐ", group_thousands(-delta)),
        std::cmp::Ordering::Equal => "0 VNĐ".into(),
    }
}

fn compare(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = super::period_from_args(sub)?;

    let cmp = report::comparison(conn, period)?;
    if maybe_print_json(json_flag, jsonl_flag, &cmp)? {
        return Ok(());
    }

    let rows = vec![
        vec![
            category_label(Category::MustHave).into(),
            fmt_vnd(cmp.previous.must_have),
            fmt_vnd(cmp.current.must_have),
            fmt_delta(cmp.delta.must_have),
        ],
        vec![
            category_label(Category::NiceToHave).into(),
            fmt_vnd(cmp.previous.nice_to_have),
            fmt_vnd(cmp.current.nice_to_have),
            fmt_delta(cmp.delta.nice_to_have),
        ],
        vec![
            category_label(Category::Wasted).into(),
            fmt_vnd(cmp.previous.wasted),
            fmt_vnd(cmp.current.wasted),
            fmt_delta(cmp.delta.wasted),
        ],
    ];
    println!(
        "{}",
        pretty_table(
            &[
                "Category",
                &format!("Last month ({})", cmp.previous.period),
                &format!("This month ({})", cmp.current.period),
                "Change",
            ],
            rows,
        )
    );
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = super::period_from_args(sub)?;
    let periods = *sub.get_one::<usize>("periods").unwrap();

    let points = report::income_trend(conn, period, periods)?;
    if maybe_print_json(json_flag, jsonl_flag, &points)? {
        return Ok(());
    }

    let rows = points
        .iter()
        .map(|p| vec![p.period.to_string(), fmt_vnd(p.total)])
        .collect();
    println!("{}", pretty_table(&["Month", "Income"], rows));
    Ok(())
}

#[derive(Serialize)]
struct MonthSummary {
    period: crate::period::Period,
    income: i64,
    expense: i64,
}

/// The home screen's income-vs-expense pair for one month.
fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = super::period_from_args(sub)?;
    let (start, end) = period.range()?;

    let out = MonthSummary {
        period,
        income: db::sum_incomes(conn, start, end)?,
        expense: db::sum_expenses(conn, start, end, None)?,
    };
    if maybe_print_json(json_flag, jsonl_flag, &out)? {
        return Ok(());
    }

    let rows = vec![vec![
        out.period.to_string(),
        fmt_vnd(out.income),
        fmt_vnd(out.expense),
    ]];
    println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    Ok(())
}
