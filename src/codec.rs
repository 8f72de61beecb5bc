// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{Error, Result};
use crate::models::Expense;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const FIELD_COUNT: usize = 5;

/// Field order within the records file: id, amount, category, description, date.
pub fn encode(expense: &Expense) -> [String; FIELD_COUNT] {
    [
        expense.id.to_string(),
        expense.amount.to_string(),
        expense.category.clone(),
        expense.description.clone(),
        expense.date.format(DATE_FORMAT).to_string(),
    ]
}

/// Decodes one record read back from the records file. Category and
/// description are accepted as-is; their bounds are an add-time concern.
pub fn decode(record: &StringRecord) -> Result<Expense> {
    if record.len() != FIELD_COUNT {
        return Err(Error::MalformedRecord(format!(
            "expected {} fields, got {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let id = record[0]
        .parse::<i64>()
        .map_err(|_| Error::InvalidId("not an integer"))?;
    let amount = record[1]
        .parse::<i64>()
        .map_err(|_| Error::InvalidAmount("not an integer"))?;
    let date = parse_date(&record[4])?;

    Ok(Expense {
        id,
        amount,
        category: record[2].to_string(),
        description: record[3].to_string(),
        date,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(raw.to_string()))?;
    // chrono accepts unpadded components; persisted dates must be canonical.
    if date.format(DATE_FORMAT).to_string() != raw {
        return Err(Error::InvalidDate(raw.to_string()));
    }
    Ok(date)
}
