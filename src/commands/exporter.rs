// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;

use crate::db;
use crate::models::{Expense, Income};
use crate::period::Period;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("incomes", sub)) => export_incomes(conn, sub),
        Some(("expenses", sub)) => export_expenses(conn, sub),
        _ => Ok(()),
    }
}

/// Month filter for exports: `--month` (with `--year` defaulting to the
/// current year) narrows to one month; no `--month` means everything.
fn month_filter(sub: &clap::ArgMatches) -> Result<Option<Period>> {
    match sub.get_one::<u32>("month").copied() {
        Some(month) => {
            let year = sub
                .get_one::<i32>("year")
                .copied()
                .unwrap_or_else(|| chrono::Local::now().date_naive().year());
            Ok(Some(Period::new(month, year)?))
        }
        None => Ok(None),
    }
}

fn export_incomes(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let entries: Vec<Income> = match month_filter(sub)? {
        Some(period) => {
            let (start, end) = period.range()?;
            db::incomes_in_range(conn, start, end)?
        }
        None => db::all_incomes(conn)?,
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "name", "amount", "date"])?;
            for e in &entries {
                wtr.write_record([
                    e.id.to_string(),
                    e.name.clone(),
                    e.amount.to_string(),
                    e.date.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&entries)?)?;
        }
        other => anyhow::bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} income entries to {}", entries.len(), out);
    Ok(())
}

fn export_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let entries: Vec<Expense> = match month_filter(sub)? {
        Some(period) => {
            let (start, end) = period.range()?;
            db::expenses_in_range(conn, start, end)?
        }
        None => db::all_expenses(conn)?,
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "name", "amount", "date", "category"])?;
            for e in &entries {
                wtr.write_record([
                    e.id.to_string(),
                    e.name.clone(),
                    e.amount.to_string(),
                    e.date.to_string(),
                    e.category.as_str().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&entries)?)?;
        }
        other => anyhow::bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} expense entries to {}", entries.len(), out);
    Ok(())
}
