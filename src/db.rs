// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::models::{validate_entry, Category, Expense, Income};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.thuchi", "Thuchi", "thuchi"));

/// Platform data-dir location of the database. `THUCHI_DB` overrides it,
/// which scripts and tests use to point at a throwaway file.
pub fn db_path() -> anyhow::Result<PathBuf> {
    if let Ok(p) = std::env::var("THUCHI_DB") {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("thuchi.sqlite"))
}

pub fn open_or_init() -> anyhow::Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS incomes(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        amount INTEGER NOT NULL CHECK(amount >= 0),
        date TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_incomes_date ON incomes(date);

    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        amount INTEGER NOT NULL CHECK(amount >= 0),
        date TEXT NOT NULL,
        category TEXT NOT NULL CHECK(category IN ('MUST_HAVE','NICE_TO_HAVE','WASTED')),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
    "#,
    )
}

pub fn insert_income(conn: &Connection, name: &str, amount: i64, date: NaiveDate) -> Result<i64> {
    validate_entry(name, amount)?;
    conn.execute(
        "INSERT INTO incomes(name, amount, date) VALUES (?1, ?2, ?3)",
        params![name, amount, date.to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_expense(
    conn: &Connection,
    name: &str,
    amount: i64,
    date: NaiveDate,
    category: Category,
) -> Result<i64> {
    validate_entry(name, amount)?;
    conn.execute(
        "INSERT INTO expenses(name, amount, date, category) VALUES (?1, ?2, ?3, ?4)",
        params![name, amount, date.to_string(), category],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full replace of an income row by id; edits are never partial patches.
pub fn update_income(
    conn: &Connection,
    id: i64,
    name: &str,
    amount: i64,
    date: NaiveDate,
) -> Result<()> {
    validate_entry(name, amount)?;
    let n = conn.execute(
        "UPDATE incomes SET name=?1, amount=?2, date=?3 WHERE id=?4",
        params![name, amount, date.to_string(), id],
    )?;
    if n == 0 {
        return Err(Error::NotFound(id));
    }
    Ok(())
}

pub fn update_expense(
    conn: &Connection,
    id: i64,
    name: &str,
    amount: i64,
    date: NaiveDate,
    category: Category,
) -> Result<()> {
    validate_entry(name, amount)?;
    let n = conn.execute(
        "UPDATE expenses SET name=?1, amount=?2, date=?3, category=?4 WHERE id=?5",
        params![name, amount, date.to_string(), category, id],
    )?;
    if n == 0 {
        return Err(Error::NotFound(id));
    }
    Ok(())
}

pub fn get_income(conn: &Connection, id: i64) -> Result<Income> {
    conn.query_row(
        "SELECT id, name, amount, date FROM incomes WHERE id=?1",
        params![id],
        |r| {
            Ok(Income {
                id: r.get(0)?,
                name: r.get(1)?,
                amount: r.get(2)?,
                date: r.get(3)?,
            })
        },
    )
    .optional()?
    .ok_or(Error::NotFound(id))
}

pub fn get_expense(conn: &Connection, id: i64) -> Result<Expense> {
    conn.query_row(
        "SELECT id, name, amount, date, category FROM expenses WHERE id=?1",
        params![id],
        |r| {
            Ok(Expense {
                id: r.get(0)?,
                name: r.get(1)?,
                amount: r.get(2)?,
                date: r.get(3)?,
                category: r.get(4)?,
            })
        },
    )
    .optional()?
    .ok_or(Error::NotFound(id))
}

/// Incomes with `start <= date <= end`, date ascending, id as tie-break so
/// same-day entries keep insertion order.
pub fn incomes_in_range(conn: &Connection, start: NaiveDate, end: NaiveDate) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, amount, date FROM incomes
         WHERE date >= ?1 AND date <= ?2 ORDER BY date, id",
    )?;
    let rows = stmt.query_map(params![start.to_string(), end.to_string()], |r| {
        Ok(Income {
            id: r.get(0)?,
            name: r.get(1)?,
            amount: r.get(2)?,
            date: r.get(3)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn expenses_in_range(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, amount, date, category FROM expenses
         WHERE date >= ?1 AND date <= ?2 ORDER BY date, id",
    )?;
    let rows = stmt.query_map(params![start.to_string(), end.to_string()], |r| {
        Ok(Expense {
            id: r.get(0)?,
            name: r.get(1)?,
            amount: r.get(2)?,
            date: r.get(3)?,
            category: r.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn all_incomes(conn: &Connection) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare("SELECT id, name, amount, date FROM incomes ORDER BY date, id")?;
    let rows = stmt.query_map([], |r| {
        Ok(Income {
            id: r.get(0)?,
            name: r.get(1)?,
            amount: r.get(2)?,
            date: r.get(3)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn all_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt =
        conn.prepare("SELECT id, name, amount, date, category FROM expenses ORDER BY date, id")?;
    let rows = stmt.query_map([], |r| {
        Ok(Expense {
            id: r.get(0)?,
            name: r.get(1)?,
            amount: r.get(2)?,
            date: r.get(3)?,
            category: r.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Sum of income amounts in the inclusive range. SUM over zero rows is SQL
/// NULL; the contract here is a plain 0.
pub fn sum_incomes(conn: &Connection, start: NaiveDate, end: NaiveDate) -> Result<i64> {
    let total: Option<i64> = conn.query_row(
        "SELECT SUM(amount) FROM incomes WHERE date >= ?1 AND date <= ?2",
        params![start.to_string(), end.to_string()],
        |r| r.get(0),
    )?;
    Ok(total.unwrap_or(0))
}

/// Sum of expense amounts in the inclusive range, optionally restricted to
/// one category. Zero rows sums to 0, never NULL.
pub fn sum_expenses(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
    category: Option<Category>,
) -> Result<i64> {
    let total: Option<i64> = match category {
        Some(cat) => conn.query_row(
            "SELECT SUM(amount) FROM expenses
             WHERE date >= ?1 AND date <= ?2 AND category = ?3",
            params![start.to_string(), end.to_string(), cat],
            |r| r.get(0),
        )?,
        None => conn.query_row(
            "SELECT SUM(amount) FROM expenses WHERE date >= ?1 AND date <= ?2",
            params![start.to_string(), end.to_string()],
            |r| r.get(0),
        )?,
    };
    Ok(total.unwrap_or(0))
}
