// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::balances::{BalancesContainer, BalancesReport, ContainerKind, Figure};
use crate::book::Book;
use crate::config::Config;
use crate::models::BalanceType;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::info;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balances", sub)) => balances(sub)?,
        Some(("find", sub)) => find(sub)?,
        Some(("accounts", sub)) => accounts(sub)?,
        _ => {}
    }
    Ok(())
}

/// Reads `--file` when given, otherwise runs `--query` against `--book` through the API.
pub fn load_report(sub: &clap::ArgMatches) -> Result<BalancesReport> {
    if let Some(path) = sub.get_one::<String>("file") {
        let path = path.trim();
        let raw =
            std::fs::read_to_string(path).with_context(|| format!("Open payload {}", path))?;
        let report = BalancesReport::from_json(Book::offline(), &raw)
            .with_context(|| format!("Invalid balances payload in {}", path))?;
        info!(path, "Loaded balances payload");
        return Ok(report);
    }
    let book_id = sub
        .get_one::<String>("book")
        .map(|s| s.trim())
        .ok_or_else(|| anyhow!("Either --book or --file is required"))?;
    let query = sub.get_one::<String>("query").map(|s| s.as_str()).unwrap_or("");
    let cfg = Config::load()?;
    let client = ApiClient::from_config(&cfg)?;
    let book = client
        .get_book(book_id)
        .with_context(|| format!("Fetch book {}", book_id))?;
    info!(book = book.name(), query, "Running balances query");
    let report = client
        .get_balances_report(book, query)
        .with_context(|| format!("Query '{}' on book {}", query, book_id))?;
    Ok(report)
}

pub fn balance_type(sub: &clap::ArgMatches) -> Result<BalanceType> {
    match sub.get_one::<String>("type") {
        Some(t) => t.parse::<BalanceType>().map_err(|e| anyhow!(e)),
        None => Ok(BalanceType::Total),
    }
}

/// Table rows, header first, for the `balances` report.
pub fn balances_rows(report: &BalancesReport, sub: &clap::ArgMatches) -> Result<Vec<Vec<String>>> {
    let rows = report
        .create_data_table()
        .balance_type(balance_type(sub)?)
        .raw(sub.get_flag("raw"))
        .expand_groups(sub.get_flag("expand"))
        .build();
    Ok(rows)
}

/// Serializable snapshot of a container and its subtree.
#[derive(Debug, Serialize)]
pub struct ContainerView {
    pub name: String,
    pub kind: &'static str,
    pub credit: bool,
    pub cumulative_balance: String,
    pub cumulative_credit: String,
    pub cumulative_debit: String,
    pub period_balance: String,
    pub period_credit: String,
    pub period_debit: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContainerView>,
}

impl ContainerView {
    pub fn of(c: &BalancesContainer<'_>, raw: bool) -> Self {
        let balance = |f: Figure| {
            let v = if raw { c.raw(f) } else { c.representative(f) };
            c.balances_report().book().format_value(v)
        };
        Self {
            name: c.name().to_string(),
            kind: match c.kind() {
                ContainerKind::Account => "account",
                ContainerKind::Group => "group",
            },
            credit: c.is_credit(),
            cumulative_balance: balance(Figure::CumulativeBalance),
            cumulative_credit: c.cumulative_credit_text(),
            cumulative_debit: c.cumulative_debit_text(),
            period_balance: balance(Figure::PeriodBalance),
            period_credit: c.period_credit_text(),
            period_debit: c.period_debit_text(),
            children: c
                .balances_containers()
                .iter()
                .map(|child| ContainerView::of(child, raw))
                .collect(),
        }
    }
}

pub fn tree(report: &BalancesReport, raw: bool) -> Vec<ContainerView> {
    report
        .balances_containers()
        .iter()
        .map(|c| ContainerView::of(c, raw))
        .collect()
}

fn print_rows(mut rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        return;
    }
    let header = rows.remove(0);
    let header: Vec<&str> = header.iter().map(|s| s.as_str()).collect();
    println!("{}", pretty_table(&header, rows));
}

fn balances(sub: &clap::ArgMatches) -> Result<()> {
    let report = load_report(sub)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &tree(&report, sub.get_flag("raw")))? {
        return Ok(());
    }
    print_rows(balances_rows(&report, sub)?);
    Ok(())
}

/// Figure rows of a container: label, raw, representative.
pub fn find_rows(c: &BalancesContainer<'_>) -> Vec<Vec<String>> {
    let book = c.balances_report().book();
    let mut rows = vec![vec!["Figure".to_string(), "Raw".to_string(), "Balance".to_string()]];
    for f in Figure::ALL {
        rows.push(vec![
            f.label().to_string(),
            book.format_value(c.raw(f)),
            book.format_value(c.representative(f)),
        ]);
    }
    rows
}

fn find(sub: &clap::ArgMatches) -> Result<()> {
    let report = load_report(sub)?;
    let name = sub.get_one::<String>("name").unwrap().trim();
    let c = report.balances_container(name)?;
    if maybe_print_json(
        sub.get_flag("json"),
        sub.get_flag("jsonl"),
        &ContainerView::of(&c, false),
    )? {
        return Ok(());
    }
    let parent = c.parent().map(|p| p.name()).unwrap_or("-");
    println!(
        "{} ({}, {}, parent: {})",
        c.name(),
        if c.is_from_group() { "group" } else { "account" },
        if c.is_credit() { "credit" } else { "debit" },
        parent
    );
    print_rows(find_rows(&c));
    Ok(())
}

/// One row per account leaf: name, parent group, cumulative and period balances.
pub fn account_rows(report: &BalancesReport) -> Vec<Vec<String>> {
    report
        .account_balances_containers()
        .iter()
        .map(|c| {
            vec![
                c.name().to_string(),
                c.parent().map(|p| p.name().to_string()).unwrap_or_default(),
                c.cumulative_balance_text(),
                c.period_balance_text(),
            ]
        })
        .collect()
}

fn accounts(sub: &clap::ArgMatches) -> Result<()> {
    let report = load_report(sub)?;
    let data = account_rows(&report);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!(
            "{}",
            pretty_table(&["Account", "Group", "Cumulative", "Period"], data)
        );
    }
    Ok(())
}
