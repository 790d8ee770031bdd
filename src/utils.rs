// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DecimalSeparator, Periodicity};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

const UA: &str = concat!(
    "bookclip/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/bookclip)"
);

pub const DEFAULT_FRACTION_DIGITS: u32 = 2;
pub const DEFAULT_DATE_PATTERN: &str = "dd/MM/yyyy";

pub fn http_client() -> crate::error::Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Flips the sign of debit-natured values so an increase always reads positive.
pub fn representative_value(value: Decimal, credit: bool) -> Decimal {
    if credit || value.is_zero() {
        value
    } else {
        -value
    }
}

pub fn round(value: Decimal, fraction_digits: u32) -> Decimal {
    value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_value(value: Decimal, separator: DecimalSeparator, fraction_digits: u32) -> String {
    let mut rounded = round(value, fraction_digits);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    let s = format!("{:.*}", fraction_digits as usize, rounded);
    match separator {
        DecimalSeparator::Dot => s,
        DecimalSeparator::Comma => s.replace('.', ","),
    }
}

/// `yyyymmdd` to a calendar day. Zero month/day parts (monthly and yearly buckets) read as 1.
pub fn fuzzy_to_date(fuzzy: u32) -> Option<NaiveDate> {
    let year = (fuzzy / 10000) as i32;
    let month = ((fuzzy / 100) % 100).max(1);
    let day = (fuzzy % 100).max(1);
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn date_pattern_for<'a>(book_pattern: &'a str, periodicity: Periodicity) -> &'a str {
    match periodicity {
        Periodicity::Daily => book_pattern,
        Periodicity::Monthly => "MM/yyyy",
        Periodicity::Yearly => "yyyy",
    }
}

/// Translates a `dd/MM/yyyy`-style pattern into a chrono format string.
pub fn to_chrono_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        let token = match (c, run) {
            ('y', 2) => Some("%y"),
            ('y', _) => Some("%Y"),
            ('M', 1 | 2) => Some("%m"),
            ('M', 3) => Some("%b"),
            ('M', _) => Some("%B"),
            ('d', _) => Some("%d"),
            ('H', _) => Some("%H"),
            ('m', _) => Some("%M"),
            ('s', _) => Some("%S"),
            _ => None,
        };
        match token {
            Some(t) => out.push_str(t),
            None => {
                for _ in 0..run {
                    if c == '%' {
                        out.push_str("%%");
                    } else {
                        out.push(c);
                    }
                }
            }
        }
        i += run;
    }
    out
}

/// Time tokens in `pattern` render as midnight.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.and_time(NaiveTime::default())
        .format(&to_chrono_pattern(pattern))
        .to_string()
}

/// First non-blank value among `keys`, scanned in order.
pub fn first_property<'a>(properties: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| properties.get(*k))
        .find(|v| !v.trim().is_empty())
        .map(|v| v.as_str())
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
