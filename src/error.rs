// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;

use thiserror::Error;

/// Error type shared by the codec, storage, and service layers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid expense category: {0}")]
    InvalidCategory(&'static str),

    #[error("invalid expense description: {0}")]
    InvalidDescription(&'static str),

    #[error("invalid expense amount: {0}")]
    InvalidAmount(&'static str),

    #[error("invalid expense id: {0}")]
    InvalidId(&'static str),

    #[error("malformed expense record: {0}")]
    MalformedRecord(String),

    #[error("invalid expense date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("corrupt id counter '{0}': not an integer")]
    CorruptCounter(String),

    #[error("expense with id {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(err) => Error::Io(err),
            _ => Error::MalformedRecord(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
