// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bookclip::models::{BalanceType, BalancesPayload};
use bookclip::{Book, BalancesReport};
use serde_json::json;

fn report() -> BalancesReport {
    let payload: BalancesPayload = serde_json::from_value(json!({
        "periodicity": "MONTHLY",
        "accountBalances": [{
            "name": "Cash",
            "credit": false,
            "cumulativeBalance": "70",
            "balances": [
                {"fuzzyDate": 20250100, "periodBalance": "30", "cumulativeBalance": "30"},
                {"fuzzyDate": 20250200, "periodBalance": "40", "cumulativeBalance": "70"}
            ]
        }],
        "groupBalances": [{
            "name": "Income",
            "credit": true,
            "cumulativeBalance": "500",
            "balances": [
                {"fuzzyDate": 20250200, "periodBalance": "500", "cumulativeBalance": "500"}
            ],
            "accountBalances": [{
                "name": "Sales",
                "credit": true,
                "cumulativeBalance": "500",
                "balances": [
                    {"fuzzyDate": 20250200, "periodBalance": "500", "cumulativeBalance": "500"}
                ]
            }]
        }]
    }))
    .unwrap();
    BalancesReport::new(Book::offline(), payload)
}

#[test]
fn totals_table_lists_root_containers() {
    let r = report();
    let t = r.create_data_table().build();
    assert_eq!(
        t,
        vec![
            vec!["Name", "Balance"],
            vec!["Cash", "-70.00"],
            vec!["Income", "500.00"],
        ]
    );
}

#[test]
fn expanded_raw_totals_walk_the_tree() {
    let r = report();
    let t = r
        .create_data_table()
        .expand_groups(true)
        .raw(true)
        .formatted(false)
        .build();
    let names: Vec<&str> = t.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, ["Name", "Cash", "Income", "Sales"]);
    assert_eq!(t[1][1], "70");
}

#[test]
fn period_table_spans_union_of_dates() {
    let r = report();
    let t = r
        .create_data_table()
        .balance_type(BalanceType::Period)
        .build();
    assert_eq!(t[0], ["Name", "01/2025", "02/2025"]);
    assert_eq!(t[1], ["Cash", "-30.00", "-40.00"]);
    assert_eq!(t[2], ["Income", "", "500.00"]);
}

#[test]
fn cumulative_table_transposes() {
    let r = report();
    let t = r
        .create_data_table()
        .balance_type(BalanceType::Cumulative)
        .transposed(true)
        .build();
    assert_eq!(t[0], ["Name", "Cash", "Income"]);
    assert_eq!(t[2], ["02/2025", "-70.00", "500.00"]);
}

#[test]
fn container_tables_cover_self_or_children() {
    let r = report();
    let income = r.balances_container("Income").unwrap();
    let t = income.create_data_table().build();
    assert_eq!(t, vec![vec!["Name", "Balance"], vec!["Sales", "500.00"]]);
    let cash = r.balances_container("Cash").unwrap();
    assert_eq!(cash.create_data_table().build().len(), 2);
}
