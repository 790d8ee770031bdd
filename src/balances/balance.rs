// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::container::BalancesContainer;
use crate::models::BalancePayload;
use crate::utils::{fuzzy_to_date, representative_value};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One dated sample of a container's time series.
#[derive(Debug, Clone, Copy)]
pub struct Balance<'r> {
    container: BalancesContainer<'r>,
    fuzzy_date: u32,
    date: Option<NaiveDate>,
    period_balance: Decimal,
    cumulative_balance: Decimal,
}

impl<'r> Balance<'r> {
    pub(super) fn new(container: BalancesContainer<'r>, p: &BalancePayload) -> Self {
        Self {
            container,
            fuzzy_date: p.fuzzy_date,
            date: fuzzy_to_date(p.fuzzy_date),
            period_balance: p.period_balance.unwrap_or_default(),
            cumulative_balance: p.cumulative_balance.unwrap_or_default(),
        }
    }

    pub fn container(&self) -> BalancesContainer<'r> {
        self.container
    }

    /// `yyyymmdd` as sent by the server.
    pub fn fuzzy_date(&self) -> u32 {
        self.fuzzy_date
    }

    /// `None` only for a malformed fuzzy date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Date formatted for the report periodicity; empty when the date is malformed.
    pub fn date_text(&self) -> String {
        let report = self.container.balances_report();
        self.date
            .map(|d| report.book().format_date(d, report.periodicity()))
            .unwrap_or_default()
    }

    /// Raw cumulative balance at this date.
    pub fn amount(&self) -> Decimal {
        self.cumulative_balance
    }

    pub fn cumulative_balance(&self) -> Decimal {
        representative_value(self.cumulative_balance, self.container.is_credit())
    }

    pub fn cumulative_balance_raw(&self) -> Decimal {
        self.cumulative_balance
    }

    pub fn period_balance(&self) -> Decimal {
        representative_value(self.period_balance, self.container.is_credit())
    }

    pub fn period_balance_raw(&self) -> Decimal {
        self.period_balance
    }

    pub fn cumulative_balance_text(&self) -> String {
        self.format(self.cumulative_balance())
    }

    pub fn cumulative_balance_raw_text(&self) -> String {
        self.format(self.cumulative_balance_raw())
    }

    pub fn period_balance_text(&self) -> String {
        self.format(self.period_balance())
    }

    pub fn period_balance_raw_text(&self) -> String {
        self.format(self.period_balance_raw())
    }

    fn format(&self, value: Decimal) -> String {
        self.container.balances_report().book().format_value(value)
    }
}
