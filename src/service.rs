// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Local;

use crate::error::Result;
use crate::models::{self, Expense};
use crate::storage::ExpenseStorage;

/// Validation and orchestration over an [`ExpenseStorage`] backend.
/// Touches no files itself; every persisted effect goes through the
/// injected storage.
pub struct ExpenseService<S> {
    storage: S,
}

impl<S: ExpenseStorage> ExpenseService<S> {
    pub fn new(storage: S) -> Self {
        ExpenseService { storage }
    }

    /// Records a new expense dated today. The generated id stays consumed
    /// even when the append fails afterwards; it is never handed out again.
    pub fn add_expense(&self, category: &str, description: &str, amount: i64) -> Result<Expense> {
        let category = models::parse_category(category)?;
        let description = models::parse_description(description)?;
        models::validate_amount(amount)?;

        let id = self.storage.generate_id()?;
        let expense = Expense {
            id,
            amount,
            category,
            description,
            date: Local::now().date_naive(),
        };
        self.storage.add(&expense)?;
        Ok(expense)
    }

    /// Deletes an expense by id. There is no soft delete or recovery.
    pub fn delete_expense(&self, id: i64) -> Result<()> {
        models::validate_id(id)?;
        self.storage.delete(id)
    }

    /// All stored expenses in insertion order.
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.storage.list()
    }

    /// All-time total of recorded amounts; 0 when nothing is recorded.
    pub fn expense_summary(&self) -> Result<i64> {
        Ok(self.list_expenses()?.iter().map(|expense| expense.amount).sum())
    }
}
