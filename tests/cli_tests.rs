// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Local};
use spendclip::{cli, commands, service::ExpenseService, storage::FsStorage};
use tempfile::TempDir;

fn service_in(dir: &TempDir) -> ExpenseService<FsStorage> {
    ExpenseService::new(FsStorage::new(dir.path()))
}

#[test]
fn add_delete_summary_flow_through_the_cli() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let matches = cli::build_cli().get_matches_from([
        "spendclip",
        "add",
        "--category",
        "Food",
        "--description",
        "Lunch",
        "--amount",
        "20",
    ]);
    if let Some(("add", sub)) = matches.subcommand() {
        commands::add::handle(&service, sub).unwrap();
    } else {
        panic!("no add subcommand");
    }
    assert_eq!(service.expense_summary().unwrap(), 20);

    let matches = cli::build_cli().get_matches_from(["spendclip", "delete", "--id", "1"]);
    if let Some(("delete", sub)) = matches.subcommand() {
        commands::delete::handle(&service, sub).unwrap();
    } else {
        panic!("no delete subcommand");
    }
    assert_eq!(service.expense_summary().unwrap(), 0);
}

#[test]
fn add_with_short_flags_parses() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let matches = cli::build_cli().get_matches_from([
        "spendclip", "add", "-c", "Transport", "-d", "Bus ticket", "-a", "3",
    ]);
    if let Some(("add", sub)) = matches.subcommand() {
        commands::add::handle(&service, sub).unwrap();
    } else {
        panic!("no add subcommand");
    }

    let all = service.list_expenses().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, "Transport");
}

#[test]
fn delete_of_unknown_id_errors_through_the_cli() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let matches = cli::build_cli().get_matches_from(["spendclip", "delete", "--id", "7"]);
    if let Some(("delete", sub)) = matches.subcommand() {
        assert!(commands::delete::handle(&service, sub).is_err());
    } else {
        panic!("no delete subcommand");
    }
}

#[test]
fn list_handles_empty_store() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let matches = cli::build_cli().get_matches_from(["spendclip", "list"]);
    if let Some(("list", sub)) = matches.subcommand() {
        commands::list::handle(&service, sub).unwrap();
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_json_flag_renders() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);
    service.add_expense("Food", "Lunch", 20).unwrap();

    let matches = cli::build_cli().get_matches_from(["spendclip", "list", "--json"]);
    if let Some(("list", sub)) = matches.subcommand() {
        commands::list::handle(&service, sub).unwrap();
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn summary_filters_by_current_month() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);
    service.add_expense("Food", "Lunch", 20).unwrap();

    let month = Local::now().month().to_string();
    let matches = cli::build_cli().get_matches_from(["spendclip", "summary", "--month", &month]);
    if let Some(("summary", sub)) = matches.subcommand() {
        commands::summary::handle(&service, sub).unwrap();
    } else {
        panic!("no summary subcommand");
    }
}

#[test]
fn amount_must_be_an_integer() {
    let parsed = cli::build_cli().try_get_matches_from([
        "spendclip", "add", "-c", "Food", "-d", "Lunch", "-a", "ten",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn summary_month_is_range_checked() {
    for bad in ["0", "13"] {
        let parsed =
            cli::build_cli().try_get_matches_from(["spendclip", "summary", "--month", bad]);
        assert!(parsed.is_err(), "accepted month {}", bad);
    }
}
