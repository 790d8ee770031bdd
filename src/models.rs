// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Wire payloads of the ledger API. Amounts arrive as strings or numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Periodicity {
    #[default]
    Daily,
    Monthly,
    #[serde(alias = "YARLY")]
    Yearly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecimalSeparator {
    Comma,
    #[default]
    Dot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Permission {
    #[default]
    None,
    Viewer,
    Post,
    Editor,
    Owner,
}

/// Which figure a data table reads from each container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceType {
    #[default]
    Total,
    Period,
    Cumulative,
}

impl std::str::FromStr for BalanceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" => Ok(Self::Total),
            "period" => Ok(Self::Period),
            "cumulative" => Ok(Self::Cumulative),
            other => Err(format!(
                "Unknown balance type '{}' (use total|period|cumulative)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesPayload {
    #[serde(default)]
    pub periodicity: Periodicity,
    #[serde(default)]
    pub account_balances: Vec<AccountBalancesPayload>,
    #[serde(default)]
    pub group_balances: Vec<GroupBalancesPayload>,
}

/// One dated sample. `fuzzy_date` is `yyyymmdd`, with `00` parts for coarser buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePayload {
    #[serde(default)]
    pub fuzzy_date: u32,
    #[serde(default)]
    pub period_balance: Option<Decimal>,
    #[serde(default)]
    pub cumulative_balance: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalancesPayload {
    pub name: String,
    #[serde(default)]
    pub credit: bool,
    #[serde(default)]
    pub cumulative_balance: Option<Decimal>,
    #[serde(default)]
    pub cumulative_credit: Option<Decimal>,
    #[serde(default)]
    pub cumulative_debit: Option<Decimal>,
    #[serde(default)]
    pub period_balance: Option<Decimal>,
    #[serde(default)]
    pub period_credit: Option<Decimal>,
    #[serde(default)]
    pub period_debit: Option<Decimal>,
    #[serde(default)]
    pub balances: Vec<BalancePayload>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBalancesPayload {
    pub name: String,
    #[serde(default)]
    pub credit: bool,
    #[serde(default)]
    pub cumulative_balance: Option<Decimal>,
    #[serde(default)]
    pub cumulative_credit: Option<Decimal>,
    #[serde(default)]
    pub cumulative_debit: Option<Decimal>,
    #[serde(default)]
    pub period_balance: Option<Decimal>,
    #[serde(default)]
    pub period_credit: Option<Decimal>,
    #[serde(default)]
    pub period_debit: Option<Decimal>,
    #[serde(default)]
    pub balances: Vec<BalancePayload>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
    #[serde(default)]
    pub account_balances: Vec<AccountBalancesPayload>,
    #[serde(default)]
    pub group_balances: Vec<GroupBalancesPayload>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credit: bool,
    #[serde(default)]
    pub permanent: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub groups_ids: Vec<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fraction_digits: Option<u32>,
    #[serde(default)]
    pub decimal_separator: DecimalSeparator,
    #[serde(default)]
    pub date_pattern: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub permission: Permission,
    #[serde(default)]
    pub accounts: Vec<AccountPayload>,
    #[serde(default)]
    pub groups: Vec<GroupPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: String,
    pub title: String,
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SavedQueries {
    #[serde(default)]
    pub items: Vec<SavedQuery>,
}
