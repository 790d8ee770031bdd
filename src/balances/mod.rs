// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Balances report tree.
//!
//! A [`BalancesReport`] owns every node of the tree in a flat arena; a
//! [`BalancesContainer`] is a cheap `Copy` handle (report reference + node index)
//! so parents, children and the report itself are reached without reference
//! cycles. The tree is built once from the payload and never mutated.

mod balance;
mod container;
mod report;

pub use balance::Balance;
pub use container::{BalancesContainer, ContainerKind, Figure};
pub use report::BalancesReport;
