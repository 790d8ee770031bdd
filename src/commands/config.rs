// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{config_path, mask, Config};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let mut cfg = Config::load_from(&config_path()?)?;
            apply_set(&mut cfg, sub);
            let path = cfg.save()?;
            println!("Config saved to {}", path.display());
        }
        Some(("show", _)) => {
            let cfg = Config::load()?;
            println!("{}", pretty_table(&["Setting", "Value"], show_rows(&cfg)));
        }
        _ => {}
    }
    Ok(())
}

/// Copies the non-blank `--api-key`, `--token` and `--url` values into `cfg`.
pub fn apply_set(cfg: &mut Config, sub: &clap::ArgMatches) {
    let get = |k: &str| {
        sub.get_one::<String>(k)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };
    if let Some(k) = get("api-key") {
        cfg.api_key = Some(k);
    }
    if let Some(t) = get("token") {
        cfg.oauth_token = Some(t);
    }
    if let Some(u) = get("url") {
        cfg.base_url = u;
    }
}

pub fn show_rows(cfg: &Config) -> Vec<Vec<String>> {
    let secret = |v: &Option<String>| v.as_deref().map(mask).unwrap_or_else(|| "(unset)".into());
    vec![
        vec!["api_key".into(), secret(&cfg.api_key)],
        vec!["oauth_token".into(), secret(&cfg.oauth_token)],
        vec!["base_url".into(), cfg.base_url.clone()],
    ]
}
