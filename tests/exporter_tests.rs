// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bookclip::{cli, commands::export};
use serde_json::json;
use tempfile::tempdir;

fn write_payload(dir: &std::path::Path) -> String {
    let path = dir.join("balances.json");
    std::fs::write(
        &path,
        json!({
            "periodicity": "MONTHLY",
            "groupBalances": [{
                "name": "Expenses",
                "credit": false,
                "cumulativeBalance": "-80",
                "balances": [{"fuzzyDate": 20250300, "periodBalance": "-80", "cumulativeBalance": "-80"}],
                "accountBalances": [{
                    "name": "Groceries",
                    "credit": false,
                    "cumulativeBalance": "-80",
                    "balances": [{"fuzzyDate": 20250300, "periodBalance": "-80", "cumulativeBalance": "-80"}]
                }]
            }]
        })
        .to_string(),
    )
    .unwrap();
    path.to_string_lossy().to_string()
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["bookclip", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        export::handle(export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_balances_writes_csv_rows() {
    let dir = tempdir().unwrap();
    let src = write_payload(dir.path());
    let out_path = dir.path().join("balances.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run(&[
        "balances", "--file", &src, "--out", &out_str, "--type", "period", "--expand",
    ])
    .unwrap();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&out_path)
        .unwrap();
    let rows: Vec<Vec<String>> = rdr
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["Name", "03/2025"],
            vec!["Expenses", "80.00"],
            vec!["Groceries", "80.00"],
        ]
    );
}

#[test]
fn export_balances_writes_json_tree() {
    let dir = tempdir().unwrap();
    let src = write_payload(dir.path());
    let out_path = dir.path().join("balances.json.out");
    let out_str = out_path.to_string_lossy().to_string();

    run(&["balances", "--file", &src, "--out", &out_str, "--format", "json"]).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed[0]["name"], "Expenses");
    assert_eq!(parsed[0]["cumulative_balance"], "80.00");
    assert_eq!(parsed[0]["children"][0]["name"], "Groceries");
    assert_eq!(parsed[0]["children"][0]["kind"], "account");
}

#[test]
fn export_balances_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let src = write_payload(dir.path());
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run(&["balances", "--file", &src, "--out", &out_str, "--format", "xml"]).is_err());
    assert!(!out_path.exists());
}
