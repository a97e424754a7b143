// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Report assembly over the record store: single-month breakdowns,
//! month-over-month comparisons, and the rolling income trend. All
//! functions are stateless; each call re-reads the store.

use rusqlite::Connection;
use serde::Serialize;

use crate::db;
use crate::error::{Error, Result};
use crate::models::Category;
use crate::period::Period;

/// Per-category expense totals for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBreakdown {
    pub period: Period,
    pub must_have: i64,
    pub nice_to_have: i64,
    pub wasted: i64,
    /// Always exactly `must_have + nice_to_have + wasted`.
    pub total: i64,
}

pub fn month_breakdown(conn: &Connection, period: Period) -> Result<MonthBreakdown> {
    let (start, end) = period.range()?;
    let must_have = db::sum_expenses(conn, start, end, Some(Category::MustHave))?;
    let nice_to_have = db::sum_expenses(conn, start, end, Some(Category::NiceToHave))?;
    let wasted = db::sum_expenses(conn, start, end, Some(Category::Wasted))?;
    Ok(MonthBreakdown {
        period,
        must_have,
        nice_to_have,
        wasted,
        total: must_have + nice_to_have + wasted,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDelta {
    pub must_have: i64,
    pub nice_to_have: i64,
    pub wasted: i64,
}

/// A month set against the month before it. `delta` is current minus
/// previous per category; positive means spending went up. How the sign
/// is worded or colored is the presentation layer's business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodComparison {
    pub current: MonthBreakdown,
    pub previous: MonthBreakdown,
    pub delta: CategoryDelta,
}

pub fn comparison(conn: &Connection, period: Period) -> Result<PeriodComparison> {
    let current = month_breakdown(conn, period)?;
    let previous = month_breakdown(conn, period.previous())?;
    let delta = CategoryDelta {
        must_have: current.must_have - previous.must_have,
        nice_to_have: current.nice_to_have - previous.nice_to_have,
        wasted: current.wasted - previous.wasted,
    };
    Ok(PeriodComparison {
        current,
        previous,
        delta,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub period: Period,
    pub total: i64,
}

/// All-income totals for the given month and the months leading up to it,
/// oldest first, exactly `periods` long. The trend is deliberately
/// income-only; the category split belongs to the breakdown views.
pub fn income_trend(conn: &Connection, period: Period, periods: usize) -> Result<Vec<TrendPoint>> {
    if periods == 0 {
        return Err(Error::InvalidArgument(
            "trend length must be at least 1".into(),
        ));
    }
    let mut points = Vec::with_capacity(periods);
    let mut p = period;
    for _ in 0..periods {
        let (start, end) = p.range()?;
        let total = db::sum_incomes(conn, start, end)?;
        points.push(TrendPoint { period: p, total });
        p = p.previous();
    }
    points.reverse();
    Ok(points)
}

/// Living-standard figures derived from a breakdown alone: `minimum` is
/// the must-have total, `standard` adds nice-to-have, `total_expense` adds
/// wasted on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LivingStandard {
    pub minimum: i64,
    pub standard: i64,
    pub total_expense: i64,
}

pub fn living_standard(breakdown: &MonthBreakdown) -> LivingStandard {
    LivingStandard {
        minimum: breakdown.must_have,
        standard: breakdown.must_have + breakdown.nice_to_have,
        total_expense: breakdown.total,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShares {
    pub must_have: f64,
    pub nice_to_have: f64,
    pub wasted: f64,
}

/// Percentage split of the month's expenses. The wasted share is the
/// complement of the other two, so the three always add up to exactly 100
/// despite rounding in the first two. An empty month is all zeroes rather
/// than NaN.
pub fn category_shares(breakdown: &MonthBreakdown) -> CategoryShares {
    if breakdown.total == 0 {
        return CategoryShares {
            must_have: 0.0,
            nice_to_have: 0.0,
            wasted: 0.0,
        };
    }
    let total = breakdown.total as f64;
    let must_have = breakdown.must_have as f64 / total * 100.0;
    let nice_to_have = breakdown.nice_to_have as f64 / total * 100.0;
    CategoryShares {
        must_have,
        nice_to_have,
        wasted: 100.0 - must_have - nice_to_have,
    }
}
