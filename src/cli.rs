// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn source_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("book")
            .long("book")
            .help("Book id to query")
            .conflicts_with("file"),
    )
    .arg(
        Arg::new("query")
            .long("query")
            .help("Balances query, e.g. \"group:'Assets' before:$m\"")
            .requires("book"),
    )
    .arg(
        Arg::new("file")
            .long("file")
            .help("Read a balances payload (JSON) instead of calling the API"),
    )
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn table_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .value_parser(["total", "period", "cumulative"])
            .default_value("total")
            .help("Balance type of the table"),
    )
    .arg(
        Arg::new("raw")
            .long("raw")
            .action(ArgAction::SetTrue)
            .help("Do not normalize signs by credit nature"),
    )
    .arg(
        Arg::new("expand")
            .long("expand")
            .action(ArgAction::SetTrue)
            .help("List every nested group and account"),
    )
}

pub fn build_cli() -> Command {
    Command::new("bookclip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Balances reports over a remote double-entry ledger")
        .subcommand(
            Command::new("config")
                .about("API credentials")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("api-key").long("api-key"))
                        .arg(Arg::new("token").long("token"))
                        .arg(Arg::new("url").long("url")),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("report")
                .about("Balances reports")
                .subcommand(output_args(table_args(source_args(
                    Command::new("balances").about("Root containers of the report"),
                ))))
                .subcommand(output_args(source_args(
                    Command::new("find")
                        .about("Figures of one account or group")
                        .arg(Arg::new("name").long("name").required(true)),
                )))
                .subcommand(output_args(source_args(
                    Command::new("accounts").about("One row per account, groups flattened"),
                ))),
        )
        .subcommand(
            Command::new("export").about("Export reports").subcommand(table_args(
                source_args(
                    Command::new("balances")
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        ),
                ),
            )),
        )
        .subcommand(
            Command::new("query")
                .about("Saved queries")
                .subcommand(output_args(
                    Command::new("list").arg(Arg::new("book").long("book").required(true)),
                )),
        )
}
