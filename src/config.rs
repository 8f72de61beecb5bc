// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendclip", "spendclip"));

/// Where the counter and records files live.
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves the data directory from `--data-dir`, falling back to the
    /// platform data dir, and creates it when absent. Creation only fails
    /// for reasons other than the directory already existing.
    pub fn from_matches(matches: &clap::ArgMatches) -> Result<Config> {
        let data_dir = match matches.get_one::<String>("data-dir") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;
        Ok(Config { data_dir })
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}
