// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookclip::{cli, commands};

fn main() -> Result<()> {
    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookclip=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("config", sub)) => commands::config::handle(sub)?,
        Some(("report", sub)) => commands::report::handle(sub)?,
        Some(("export", sub)) => commands::export::handle(sub)?,
        Some(("query", sub)) => commands::query::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
