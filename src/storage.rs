// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use crate::codec;
use crate::error::{Error, Result};
use crate::models::Expense;

pub const EXPENSES_FILE: &str = "expenses.txt";
pub const IDS_FILE: &str = "ids.txt";

/// Storage capability consumed by [`ExpenseService`](crate::service::ExpenseService).
///
/// The filesystem backend below is the only implementation shipped; tests
/// substitute an in-memory one through the same seam.
pub trait ExpenseStorage {
    /// Returns the next unique expense id. Issued ids are never reused,
    /// even when the expense they were issued for is later deleted.
    fn generate_id(&self) -> Result<i64>;

    /// Appends one expense to the records file.
    fn add(&self, expense: &Expense) -> Result<()>;

    /// Removes the expense with the given id, rewriting the records file.
    fn delete(&self, id: i64) -> Result<()>;

    /// Returns every stored expense in on-disk (insertion) order.
    fn list(&self) -> Result<Vec<Expense>>;
}

impl<S: ExpenseStorage + ?Sized> ExpenseStorage for &S {
    fn generate_id(&self) -> Result<i64> {
        (**self).generate_id()
    }

    fn add(&self, expense: &Expense) -> Result<()> {
        (**self).add(expense)
    }

    fn delete(&self, id: i64) -> Result<()> {
        (**self).delete(id)
    }

    fn list(&self) -> Result<Vec<Expense>> {
        (**self).list()
    }
}

/// Flat-file storage: a CSV records file plus a single-value id counter
/// file, both under one directory.
///
/// Every operation opens its file, works, and releases the handle before
/// returning. Assumes a single logical writer at a time; interleaved writers
/// against the same directory must serialize externally.
pub struct FsStorage {
    dir: PathBuf,
}

impl FsStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsStorage { dir: dir.into() }
    }

    pub fn expenses_path(&self) -> PathBuf {
        self.dir.join(EXPENSES_FILE)
    }

    pub fn ids_path(&self) -> PathBuf {
        self.dir.join(IDS_FILE)
    }
}

impl ExpenseStorage for FsStorage {
    fn generate_id(&self) -> Result<i64> {
        let path = self.ids_path();
        let last = match fs::read_to_string(&path) {
            Ok(raw) => {
                let raw = raw.trim();
                raw.parse::<i64>()
                    .map_err(|_| Error::CorruptCounter(raw.to_string()))?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => return Err(Error::Io(err)),
        };
        let next = last + 1;
        fs::write(&path, next.to_string())?;
        Ok(next)
    }

    fn add(&self, expense: &Expense) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.expenses_path())?;
        let mut wtr = csv::Writer::from_writer(file);
        // The whole line is buffered; it reaches the file only on flush.
        wtr.write_record(codec::encode(expense))?;
        wtr.flush()?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut file = match OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.expenses_path())
        {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(id));
            }
            Err(err) => return Err(Error::Io(err)),
        };
        delete_from(id, &mut file)
    }

    fn list(&self) -> Result<Vec<Expense>> {
        match File::open(self.expenses_path()) {
            Ok(file) => read_all(file),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(Error::Io(err)),
        }
    }
}

/// Medium the delete rewrite operates on. [`File`] is the one real
/// implementation; unit tests inject an in-memory fake with failing
/// primitives.
trait RecordMedium: Read + Write + Seek {
    /// Discards all content. The cursor position is left untouched.
    fn truncate(&mut self) -> io::Result<()>;
}

impl RecordMedium for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }
}

fn read_all(reader: impl Read) -> Result<Vec<Expense>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut expenses = Vec::new();
    for record in rdr.records() {
        let record = record?;
        expenses.push(codec::decode(&record)?);
    }
    Ok(expenses)
}

/// Removes the record with `id` by rewriting the survivors in place:
/// decode everything, drop the match, then seek / truncate / write as one
/// unit of work over the same handle. Any failure before the truncate
/// leaves the medium untouched; a failure after it leaves the medium
/// truncated (the rewrite is not crash-atomic).
fn delete_from(id: i64, medium: &mut impl RecordMedium) -> Result<()> {
    let mut expenses = read_all(&mut *medium)?;
    let before = expenses.len();
    expenses.retain(|expense| expense.id != id);
    if expenses.len() == before {
        return Err(Error::NotFound(id));
    }

    medium.seek(SeekFrom::Start(0))?;
    medium.truncate()?;
    if !expenses.is_empty() {
        let mut wtr = csv::Writer::from_writer(&mut *medium);
        for expense in &expenses {
            wtr.write_record(codec::encode(expense))?;
        }
        wtr.flush()?;
    }
    Ok(())
}
