// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::balances::BalancesContainer;
use crate::book::Book;
use crate::models::{BalanceType, Periodicity};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

/// Builds a two-dimensional table (header row first) out of balances containers.
pub struct BalancesDataTableBuilder<'r> {
    book: &'r Book,
    containers: Vec<BalancesContainer<'r>>,
    periodicity: Periodicity,
    balance_type: BalanceType,
    raw: bool,
    expand_groups: bool,
    formatted: bool,
    transposed: bool,
}

impl<'r> BalancesDataTableBuilder<'r> {
    pub fn new(
        book: &'r Book,
        containers: Vec<BalancesContainer<'r>>,
        periodicity: Periodicity,
    ) -> Self {
        Self {
            book,
            containers,
            periodicity,
            balance_type: BalanceType::Total,
            raw: false,
            expand_groups: false,
            formatted: true,
            transposed: false,
        }
    }

    pub fn balance_type(mut self, balance_type: BalanceType) -> Self {
        self.balance_type = balance_type;
        self
    }

    /// Skip credit-nature sign normalization.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Emit every descendant of a group right after the group's own row.
    pub fn expand_groups(mut self, expand: bool) -> Self {
        self.expand_groups = expand;
        self
    }

    /// Format values with the book settings instead of plain decimals.
    pub fn formatted(mut self, formatted: bool) -> Self {
        self.formatted = formatted;
        self
    }

    pub fn transposed(mut self, transposed: bool) -> Self {
        self.transposed = transposed;
        self
    }

    fn rows_for(&self) -> Vec<BalancesContainer<'r>> {
        fn push<'a>(out: &mut Vec<BalancesContainer<'a>>, c: BalancesContainer<'a>, expand: bool) {
            out.push(c);
            if expand {
                for child in c.balances_containers() {
                    push(out, child, expand);
                }
            }
        }
        let mut out = Vec::new();
        for c in &self.containers {
            push(&mut out, *c, self.expand_groups);
        }
        out
    }

    fn cell(&self, value: Decimal) -> String {
        if self.formatted {
            self.book.format_value(value)
        } else {
            value.to_string()
        }
    }

    pub fn build(&self) -> Vec<Vec<String>> {
        let containers = self.rows_for();
        let table = match self.balance_type {
            BalanceType::Total => self.build_totals(&containers),
            BalanceType::Period | BalanceType::Cumulative => self.build_series(&containers),
        };
        if self.transposed {
            transpose(table)
        } else {
            table
        }
    }

    fn build_totals(&self, containers: &[BalancesContainer<'r>]) -> Vec<Vec<String>> {
        let mut table = vec![vec!["Name".to_string(), "Balance".to_string()]];
        for c in containers {
            let v = if self.raw {
                c.cumulative_balance_raw()
            } else {
                c.cumulative_balance()
            };
            table.push(vec![c.name().to_string(), self.cell(v)]);
        }
        table
    }

    fn build_series(&self, containers: &[BalancesContainer<'r>]) -> Vec<Vec<String>> {
        let cumulative = self.balance_type == BalanceType::Cumulative;
        let mut dates = BTreeSet::new();
        let mut series: Vec<(&str, HashMap<NaiveDate, Decimal>)> = Vec::new();
        for c in containers {
            let mut values = HashMap::new();
            for b in c.balances() {
                let Some(date) = b.date() else { continue };
                let v = match (cumulative, self.raw) {
                    (true, true) => b.cumulative_balance_raw(),
                    (true, false) => b.cumulative_balance(),
                    (false, true) => b.period_balance_raw(),
                    (false, false) => b.period_balance(),
                };
                dates.insert(date);
                values.insert(date, v);
            }
            series.push((c.name(), values));
        }

        let mut header = vec!["Name".to_string()];
        header.extend(dates.iter().map(|d| self.book.format_date(*d, self.periodicity)));
        let mut table = vec![header];
        for (name, values) in series {
            let mut row = vec![name.to_string()];
            row.extend(
                dates
                    .iter()
                    .map(|d| values.get(d).map(|v| self.cell(*v)).unwrap_or_default()),
            );
            table.push(row);
        }
        table
    }
}

fn transpose(table: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = table.iter().map(|r| r.len()).max().unwrap_or(0);
    (0..width)
        .map(|col| {
            table
                .iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
