// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::config::Config;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub)?,
        _ => {}
    }
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let book_id = sub.get_one::<String>("book").unwrap().trim();
    let client = ApiClient::from_config(&Config::load()?)?;
    let queries = client
        .get_saved_queries(book_id)
        .with_context(|| format!("Saved queries of book {}", book_id))?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &queries)? {
        return Ok(());
    }
    let data = queries
        .into_iter()
        .map(|q| vec![q.id, q.title, q.query])
        .collect();
    println!("{}", pretty_table(&["Id", "Title", "Query"], data));
    Ok(())
}
