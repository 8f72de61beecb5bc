// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local, Month};

use crate::service::ExpenseService;
use crate::storage::ExpenseStorage;
use crate::utils::fmt_dollars;

pub fn handle<S: ExpenseStorage>(service: &ExpenseService<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.get_one::<u32>("month").copied() {
        None => {
            println!("Total expenses: {}", fmt_dollars(service.expense_summary()?));
        }
        Some(month) => {
            // Month filtering belongs to the presentation layer; the core
            // only knows all-time listing.
            let year = Local::now().year();
            let total: i64 = service
                .list_expenses()?
                .iter()
                .filter(|e| e.date.year() == year && e.date.month() == month)
                .map(|e| e.amount)
                .sum();
            let name = Month::try_from(month as u8).map_or("?", |m| m.name());
            println!(
                "Monthly summary for {} {}: {}",
                name,
                year,
                fmt_dollars(total)
            );
        }
    }
    Ok(())
}
