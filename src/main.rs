// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendclip::{cli, commands, config::Config, service::ExpenseService, storage::FsStorage};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::from_matches(&matches)?;
    let service = ExpenseService::new(FsStorage::new(config.data_dir));

    match matches.subcommand() {
        Some(("add", sub)) => commands::add::handle(&service, sub)?,
        Some(("delete", sub)) => commands::delete::handle(&service, sub)?,
        Some(("list", sub)) => commands::list::handle(&service, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&service, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
