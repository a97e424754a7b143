// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expense;
pub mod exporter;
pub mod income;
pub mod report;

use anyhow::Result;
use chrono::Datelike;

use crate::models::Category;
use crate::period::Period;

/// Display labels for expense categories. Kept out of the domain enum so
/// the wording can be swapped without touching report logic.
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::MustHave => "Must have",
        Category::NiceToHave => "Nice to have",
        Category::Wasted => "Wasted",
    }
}

/// CLI category token (`--category must-have` etc.) to domain category.
pub(crate) fn category_from_flag(s: &str) -> Result<Category> {
    match s {
        "must-have" => Ok(Category::MustHave),
        "nice-to-have" => Ok(Category::NiceToHave),
        "wasted" => Ok(Category::Wasted),
        other => anyhow::bail!("Unknown category '{}' (use must-have|nice-to-have|wasted)", other),
    }
}

/// `--month`/`--year` with the current local month as the default, like
/// the original app opening on today's month.
pub(crate) fn period_from_args(sub: &clap::ArgMatches) -> Result<Period> {
    let today = chrono::Local::now().date_naive();
    let month = sub
        .get_one::<u32>("month")
        .copied()
        .unwrap_or_else(|| today.month());
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(|| today.year());
    Ok(Period::new(month, year)?)
}
