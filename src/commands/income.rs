// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::utils::{fmt_vnd, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::{db, report};

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

    let id = db::insert_income(conn, name, amount, date)?;
    println!("Recorded income #{}: '{}' {} on {}", id, name, fmt_vnd(amount), date);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    db::update_income(conn, id, name, amount, date)?;
    println!("Updated income #{}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = super::period_from_args(sub)?;
    let (start, end) = period.range()?;

    let entries = db::incomes_in_range(conn, start, end)?;
    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }

    let total: i64 = entries.iter().map(|e| e.amount).sum();
    let mut rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.name.clone(),
                e.date.format("%d/%m/%Y").to_string(),
                fmt_vnd(e.amount),
            ]
        })
        .collect();
    rows.push(vec![
        String::new(),
        "TOTAL".into(),
        String::new(),
        fmt_vnd(total),
    ]);
    println!("Income {}", period);
    println!("{}", pretty_table(&["ID", "Name", "Date", "Amount"], rows));

    // Recent-months strip under the table, oldest first
    let trend = report::income_trend(conn, period, 3)?;
    let headers: Vec<String> = trend.iter().map(|p| p.period.to_string()).collect();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let values: Vec<String> = trend.iter().map(|p| fmt_vnd(p.total)).collect();
    println!("{}", pretty_table(&header_refs, vec![values]));
    Ok(())
}
