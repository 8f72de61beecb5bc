// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::service::ExpenseService;
use crate::storage::ExpenseStorage;

pub fn handle<S: ExpenseStorage>(service: &ExpenseService<S>, m: &clap::ArgMatches) -> Result<()> {
    let category = m.get_one::<String>("category").unwrap();
    let description = m.get_one::<String>("description").unwrap();
    let amount = *m.get_one::<i64>("amount").unwrap();

    let expense = service.add_expense(category, description, amount)?;
    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}
