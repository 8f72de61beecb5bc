// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

pub fn build_cli() -> Command {
    Command::new("spendclip")
        .version(crate_version!())
        .about("Spendclip: plain-text expense tracking CLI")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .global(true)
                .help("Directory holding the records and id counter files (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("add")
                .about("Add a new expense dated today")
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .required(true)
                        .help("Expense category"),
                )
                .arg(
                    Arg::new("description")
                        .short('d')
                        .long("description")
                        .required(true)
                        .help("Expense description"),
                )
                .arg(
                    Arg::new("amount")
                        .short('a')
                        .long("amount")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Expense amount in whole dollars"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an expense by id")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Expense id to delete"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List all expenses")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as a JSON array"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print as JSON lines"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Show total expenses, all-time or for one month of the current year")
                .arg(
                    Arg::new("month")
                        .short('m')
                        .long("month")
                        .value_parser(value_parser!(u32).range(1..=12))
                        .help("Month for the summary (1-12)"),
                ),
        )
}
