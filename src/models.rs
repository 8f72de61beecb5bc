// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Field bounds are counted in Unicode code points, not bytes.
pub const CATEGORY_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// One recorded spending event. Constructed only by
/// [`ExpenseService::add_expense`](crate::service::ExpenseService::add_expense)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: i64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

pub fn validate_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidId("must be a positive integer"));
    }
    Ok(())
}

pub fn validate_amount(amount: i64) -> Result<()> {
    if amount <= 0 {
        return Err(Error::InvalidAmount("must be a positive integer"));
    }
    Ok(())
}

/// Trims and bounds-checks a raw category string.
pub fn parse_category(raw: &str) -> Result<String> {
    let category = raw.trim();
    match category.chars().count() {
        0 => Err(Error::InvalidCategory("must not be empty")),
        n if n > CATEGORY_MAX_CHARS => {
            Err(Error::InvalidCategory("must not exceed 100 characters"))
        }
        _ => Ok(category.to_string()),
    }
}

/// Trims and bounds-checks a raw description string.
pub fn parse_description(raw: &str) -> Result<String> {
    let description = raw.trim();
    match description.chars().count() {
        0 => Err(Error::InvalidDescription("must not be empty")),
        n if n > DESCRIPTION_MAX_CHARS => {
            Err(Error::InvalidDescription("must not exceed 255 characters"))
        }
        _ => Ok(description.to_string()),
    }
}
