// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::service::ExpenseService;
use crate::storage::ExpenseStorage;
use crate::utils::{fmt_dollars, maybe_print_json, pretty_table};

pub fn handle<S: ExpenseStorage>(service: &ExpenseService<S>, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let expenses = service.list_expenses()?;
    if maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        return Ok(());
    }
    if expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.category.clone(),
                e.description.clone(),
                fmt_dollars(e.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Category", "Description", "Amount"], rows)
    );
    Ok(())
}
