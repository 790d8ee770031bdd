// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::report::{balances_rows, load_report, tree};
use anyhow::{bail, Result};
use tracing::info;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balances", sub)) => export_balances(sub),
        _ => Ok(()),
    }
}

fn export_balances(sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let report = load_report(sub)?;
    match fmt.as_str() {
        "csv" => {
            let rows = balances_rows(&report, sub)?;
            let mut wtr = csv::Writer::from_path(out)?;
            for row in &rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
            info!(rows = rows.len().saturating_sub(1), out, "Exported CSV");
        }
        _ => {
            let items = tree(&report, sub.get_flag("raw"));
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
            info!(roots = items.len(), out, "Exported JSON");
        }
    }
    println!("Exported balances to {}", out);
    Ok(())
}
