// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("month")
            .long("month")
            .value_parser(value_parser!(u32))
            .help("Month 1-12 (defaults to the current month)"),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Calendar year (defaults to the current year)"),
    )
}

fn entry_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").long("name").required(true))
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(true)
                .help("Whole VND, no decimals"),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .required(true)
                .help("YYYY-MM-DD"),
        )
}

pub fn build_cli() -> Command {
    Command::new("thuchi")
        .about("VND income/expense tracker with monthly reports and trends")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database if it does not exist"))
        .subcommand(
            Command::new("income")
                .about("Record and review income entries")
                .subcommand(entry_args(
                    Command::new("add").about("Add an income entry"),
                ))
                .subcommand(entry_args(
                    Command::new("edit")
                        .about("Replace an income entry by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ))
                .subcommand(json_flags(period_args(
                    Command::new("list")
                        .about("Itemized income for a month, with a recent-months summary"),
                ))),
        )
        .subcommand(
            Command::new("expense")
                .about("Record and review expense entries")
                .subcommand(entry_args(
                    Command::new("add").about("Add an expense entry").arg(
                        Arg::new("category")
                            .long("category")
                            .required(true)
                            .value_parser(["must-have", "nice-to-have", "wasted"]),
                    ),
                ))
                .subcommand(entry_args(
                    Command::new("edit")
                        .about("Replace an expense entry by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .value_parser(["must-have", "nice-to-have", "wasted"]),
                        ),
                ))
                .subcommand(json_flags(period_args(
                    Command::new("list").about("Itemized expenses for a month, by category"),
                ))),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly reports")
                .subcommand(json_flags(period_args(Command::new("month").about(
                    "Category breakdown, living-standard figures, and shares for a month",
                ))))
                .subcommand(json_flags(period_args(
                    Command::new("compare").about("A month set against the month before it"),
                )))
                .subcommand(json_flags(period_args(
                    Command::new("trend")
                        .about("Income totals over recent months, oldest first")
                        .arg(
                            Arg::new("periods")
                                .long("periods")
                                .default_value("3")
                                .value_parser(value_parser!(usize)),
                        ),
                )))
                .subcommand(json_flags(period_args(
                    Command::new("summary").about("Income vs expense totals for a month"),
                ))),
        )
        .subcommand(
            Command::new("export")
                .about("Dump records to a file")
                .subcommand(period_args(
                    Command::new("incomes")
                        .about("Export income entries")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ))
                .subcommand(period_args(
                    Command::new("expenses")
                        .about("Export expense entries")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )),
        )
}
