// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bookclip::{cli, commands::report};
use std::io::Write;
use tempfile::NamedTempFile;

fn payload_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        serde_json::json!({
            "periodicity": "DAILY",
            "accountBalances": [{"name": "Cash", "credit": false, "cumulativeBalance": "12.5"}],
            "groupBalances": [{
                "name": "Liabilities",
                "credit": true,
                "cumulativeBalance": "300",
                "cumulativeCredit": "400",
                "cumulativeDebit": "100",
                "accountBalances": [{"name": "Loan", "credit": true, "cumulativeBalance": "300"}]
            }]
        })
    )
    .unwrap();
    file.flush().unwrap();
    file
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["bookclip", "report"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("report", report_m)) => report_m.subcommand().unwrap().1.clone(),
        _ => panic!("no report subcommand"),
    }
}

#[test]
fn balances_rows_from_file_source() {
    let file = payload_file();
    let path = file.path().to_str().unwrap().to_string();
    let padded = format!(" {} ", path);
    let sub = sub_matches(&["balances", "--file", &padded, "--expand"]);
    let r = report::load_report(&sub).unwrap();
    let rows = report::balances_rows(&r, &sub).unwrap();
    assert_eq!(
        rows,
        vec![
            vec!["Name", "Balance"],
            vec!["Cash", "-12.50"],
            vec!["Liabilities", "300.00"],
            vec!["Loan", "300.00"],
        ]
    );
}

#[test]
fn find_rows_report_raw_and_representative() {
    let file = payload_file();
    let path = file.path().to_str().unwrap().to_string();
    let sub = sub_matches(&["find", "--file", &path, "--name", "Liabilities"]);
    let r = report::load_report(&sub).unwrap();
    let c = r.balances_container("Liabilities").unwrap();
    let rows = report::find_rows(&c);
    assert_eq!(rows[0], ["Figure", "Raw", "Balance"]);
    assert_eq!(rows[1], ["Cumulative Balance", "300.00", "300.00"]);
    assert_eq!(rows[2], ["Cumulative Credit", "400.00", "400.00"]);
    assert_eq!(rows.len(), 7);
    assert!(r.balances_container("Equity").is_err());
}

#[test]
fn account_rows_flatten_groups() {
    let file = payload_file();
    let path = file.path().to_str().unwrap().to_string();
    let sub = sub_matches(&["accounts", "--file", &path]);
    let r = report::load_report(&sub).unwrap();
    let rows = report::account_rows(&r);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], ["Cash", "", "-12.50", "0.00"]);
    assert_eq!(rows[1], ["Loan", "Liabilities", "300.00", "0.00"]);
}

#[test]
fn tree_view_nests_children() {
    let file = payload_file();
    let path = file.path().to_str().unwrap().to_string();
    let sub = sub_matches(&["balances", "--file", &path, "--raw"]);
    let r = report::load_report(&sub).unwrap();
    let v = serde_json::to_value(report::tree(&r, true)).unwrap();
    assert_eq!(v[0]["name"], "Cash");
    assert_eq!(v[0]["cumulative_balance"], "12.50");
    assert!(v[0].get("children").is_none());
    assert_eq!(v[1]["kind"], "group");
    assert_eq!(v[1]["children"][0]["name"], "Loan");
}

#[test]
fn missing_source_is_an_error() {
    let sub = sub_matches(&["balances"]);
    assert!(report::load_report(&sub).is_err());
}

#[test]
fn unknown_balance_type_is_rejected_by_cli() {
    let res = cli::build_cli().try_get_matches_from([
        "bookclip", "report", "balances", "--file", "x.json", "--type", "weekly",
    ]);
    assert!(res.is_err());
}
