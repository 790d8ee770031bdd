// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod balances;
pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod table;
pub mod utils;

pub use balances::{Balance, BalancesContainer, BalancesReport, ContainerKind, Figure};
pub use book::Book;
pub use error::{BookclipError, Result};
