// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Expense classification. Closed set; every expense carries exactly one.
/// Display wording lives in the presentation layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    MustHave,
    NiceToHave,
    Wasted,
}

impl Category {
    /// Storage token, as persisted in the `expenses.category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MustHave => "MUST_HAVE",
            Category::NiceToHave => "NICE_TO_HAVE",
            Category::Wasted => "WASTED",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "MUST_HAVE" => Ok(Category::MustHave),
            "NICE_TO_HAVE" => Ok(Category::NiceToHave),
            "WASTED" => Ok(Category::Wasted),
            other => Err(Error::Validation(format!(
                "unknown expense category '{}'",
                other
            ))),
        }
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        s.parse()
            .map_err(|_| FromSqlError::Other(format!("unknown category token '{}'", s).into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub name: String,
    /// Whole VND; the currency has no fractional subunit.
    pub amount: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub category: Category,
}

/// Shared insert/update invariants, checked before anything touches
/// storage: trimmed name must be non-empty and the amount non-negative.
pub(crate) fn validate_entry(name: &str, amount: i64) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::Validation("name must not be empty".into()));
    }
    if amount < 0 {
        return Err(Error::Validation(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    Ok(())
}
