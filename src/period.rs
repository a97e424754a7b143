// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A calendar month. Construction validates the month number, so a held
/// `Period` always has `month` in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Period { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Inclusive `[first day, last day]` of the month. The end is day 1 of
    /// the following month minus one day, so leap Februaries and month
    /// lengths come from the calendar rather than a lookup table.
    pub fn range(&self) -> Result<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| Error::InvalidArgument(format!("year {} out of range", self.year)))?;
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| Error::InvalidArgument(format!("year {} out of range", self.year)))?;
        Ok((start, end))
    }

    /// The month before this one; January wraps to December of the
    /// previous year.
    pub fn previous(&self) -> Period {
        if self.month == 1 {
            Period {
                month: 12,
                year: self.year - 1,
            }
        } else {
            Period {
                month: self.month - 1,
                year: self.year,
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
