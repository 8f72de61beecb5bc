// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::service::ExpenseService;
use crate::storage::ExpenseStorage;

pub fn handle<S: ExpenseStorage>(service: &ExpenseService<S>, m: &clap::ArgMatches) -> Result<()> {
    let id = *m.get_one::<i64>("id").unwrap();
    service.delete_expense(id)?;
    println!("Expense with ID {} deleted successfully", id);
    Ok(())
}
