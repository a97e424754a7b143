// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::Category;
use crate::utils::{fmt_vnd, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::{db, report};

use super::{category_from_flag, category_label};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let category = category_from_flag(sub.get_one::<String>("category").unwrap())?;

    let id = db::insert_expense(conn, name, amount, date, category)?;
    println!(
        "Recorded expense #{}: '{}' {} ({}) on {}",
        id,
        name,
        fmt_vnd(amount),
        category_label(category),
        date
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let category = category_from_flag(sub.get_one::<String>("category").unwrap())?;

    db::update_expense(conn, id, name, amount, date, category)?;
    println!("Updated expense #{}", id);
    Ok(())
}

/// Itemized month table with one amount column per category, the way the
/// original expense screen laid it out, topped off with per-category
/// totals.
fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = super::period_from_args(sub)?;
    let (start, end) = period.range()?;

    let entries = db::expenses_in_range(conn, start, end)?;
    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }

    let breakdown = report::month_breakdown(conn, period)?;
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(entries.len() + 1);
    for e in &entries {
        let money = fmt_vnd(e.amount);
        let (must_have, nice_to_have, wasted) = match e.category {
            Category::MustHave => (money, String::new(), String::new()),
            Category::NiceToHave => (String::new(), money, String::new()),
            Category::Wasted => (String::new(), String::new(), money),
        };
        rows.push(vec![
            e.id.to_string(),
            e.name.clone(),
            e.date.format("%d/%m/%Y").to_string(),
            must_have,
            nice_to_have,
            wasted,
        ]);
    }
    rows.push(vec![
        String::new(),
        "TOTAL".into(),
        String::new(),
        fmt_vnd(breakdown.must_have),
        fmt_vnd(breakdown.nice_to_have),
        fmt_vnd(breakdown.wasted),
    ]);

    println!("Expenses {}", period);
    println!(
        "{}",
        pretty_table(
            &[
                "ID",
                "Name",
                "Date",
                category_label(Category::MustHave),
                category_label(Category::NiceToHave),
                category_label(Category::Wasted),
            ],
            rows,
        )
    );
    Ok(())
}
