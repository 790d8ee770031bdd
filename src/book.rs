// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    AccountPayload, BookPayload, DecimalSeparator, GroupPayload, Periodicity, Permission,
};
use crate::utils::{
    date_pattern_for, first_property, format_date, format_value, normalize_name,
    representative_value, round, DEFAULT_DATE_PATTERN, DEFAULT_FRACTION_DIGITS,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A ledger as seen by the balances engine: formatting settings plus its accounts and groups.
#[derive(Debug, Clone)]
pub struct Book {
    id: String,
    name: String,
    fraction_digits: u32,
    decimal_separator: DecimalSeparator,
    date_pattern: String,
    time_zone: Option<String>,
    permission: Permission,
    accounts: Vec<Account>,
    groups: Vec<Group>,
}

impl Book {
    pub fn from_payload(p: BookPayload) -> Self {
        Self {
            id: p.id,
            name: p.name,
            fraction_digits: p.fraction_digits.unwrap_or(DEFAULT_FRACTION_DIGITS),
            decimal_separator: p.decimal_separator,
            date_pattern: p
                .date_pattern
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string()),
            time_zone: p.time_zone,
            permission: p.permission,
            accounts: p.accounts.into_iter().map(Account::from_payload).collect(),
            groups: p.groups.into_iter().map(Group::from_payload).collect(),
        }
    }

    /// Formatting-only book for payloads that did not come with one.
    pub fn offline() -> Self {
        Self::from_payload(BookPayload {
            id: "offline".into(),
            name: "Offline".into(),
            ..Default::default()
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    pub fn decimal_separator(&self) -> DecimalSeparator {
        self.decimal_separator
    }

    pub fn date_pattern(&self) -> &str {
        &self.date_pattern
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn format_value(&self, value: Decimal) -> String {
        format_value(value, self.decimal_separator, self.fraction_digits)
    }

    pub fn format_date(&self, date: NaiveDate, periodicity: Periodicity) -> String {
        format_date(date, date_pattern_for(&self.date_pattern, periodicity))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Looks up by id first, then by normalized name.
    pub fn account(&self, id_or_name: &str) -> Option<&Account> {
        let key = normalize_name(id_or_name);
        self.accounts
            .iter()
            .find(|a| a.id == id_or_name)
            .or_else(|| self.accounts.iter().find(|a| a.normalized_name == key))
    }

    pub fn group(&self, id_or_name: &str) -> Option<&Group> {
        let key = normalize_name(id_or_name);
        self.groups
            .iter()
            .find(|g| g.id == id_or_name)
            .or_else(|| self.groups.iter().find(|g| normalize_name(&g.name) == key))
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    name: String,
    normalized_name: String,
    description: Option<String>,
    credit: bool,
    permanent: bool,
    active: bool,
    balance: Option<Decimal>,
    group_ids: Vec<String>,
    properties: HashMap<String, String>,
}

impl Account {
    fn from_payload(p: AccountPayload) -> Self {
        Self {
            normalized_name: normalize_name(&p.name),
            id: p.id,
            name: p.name,
            description: p.description,
            credit: p.credit,
            permanent: p.permanent,
            active: p.active,
            balance: p.balance,
            group_ids: p.groups_ids,
            properties: p.properties,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_credit(&self) -> bool {
        self.credit
    }

    /// Permanent (real) accounts keep their balance over time.
    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Balance rounded to two places; sign-normalized by credit nature unless `raw`.
    pub fn balance(&self, raw: bool) -> Decimal {
        let balance = round(self.balance.unwrap_or_default(), 2);
        if raw {
            balance
        } else {
            representative_value(balance, self.credit)
        }
    }

    pub fn is_in_group(&self, group: &Group) -> bool {
        self.group_ids.iter().any(|id| *id == group.id)
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn property(&self, keys: &[&str]) -> Option<&str> {
        first_property(&self.properties, keys)
    }
}

#[derive(Debug, Clone)]
pub struct Group {
    id: String,
    name: String,
    properties: HashMap<String, String>,
}

impl Group {
    fn from_payload(p: GroupPayload) -> Self {
        Self {
            id: p.id,
            name: p.name,
            properties: p.properties,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn property(&self, keys: &[&str]) -> Option<&str> {
        first_property(&self.properties, keys)
    }
}
