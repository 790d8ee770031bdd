// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::balance::Balance;
use super::report::BalancesReport;
use crate::book::{Account, Group};
use crate::models::{AccountBalancesPayload, BalancePayload, GroupBalancesPayload};
use crate::table::BalancesDataTableBuilder;
use crate::utils::{first_property, representative_value};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

pub(super) type NodeId = usize;

/// Whether a container wraps an account (leaf) or a group (branch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Account,
    Group,
}

/// The six aggregated figures every container carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    CumulativeBalance,
    CumulativeCredit,
    CumulativeDebit,
    PeriodBalance,
    PeriodCredit,
    PeriodDebit,
}

impl Figure {
    pub const ALL: [Figure; 6] = [
        Figure::CumulativeBalance,
        Figure::CumulativeCredit,
        Figure::CumulativeDebit,
        Figure::PeriodBalance,
        Figure::PeriodCredit,
        Figure::PeriodDebit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Figure::CumulativeBalance => "Cumulative Balance",
            Figure::CumulativeCredit => "Cumulative Credit",
            Figure::CumulativeDebit => "Cumulative Debit",
            Figure::PeriodBalance => "Period Balance",
            Figure::PeriodCredit => "Period Credit",
            Figure::PeriodDebit => "Period Debit",
        }
    }
}

#[derive(Debug, Default)]
struct Figures {
    cumulative_balance: Decimal,
    cumulative_credit: Decimal,
    cumulative_debit: Decimal,
    period_balance: Decimal,
    period_credit: Decimal,
    period_debit: Decimal,
}

impl Figures {
    fn get(&self, figure: Figure) -> Decimal {
        match figure {
            Figure::CumulativeBalance => self.cumulative_balance,
            Figure::CumulativeCredit => self.cumulative_credit,
            Figure::CumulativeDebit => self.cumulative_debit,
            Figure::PeriodBalance => self.period_balance,
            Figure::PeriodCredit => self.period_credit,
            Figure::PeriodDebit => self.period_debit,
        }
    }
}

#[derive(Debug)]
pub(super) enum NodeKind {
    Account,
    /// Child ids in payload order; groups are listed before accounts on read.
    Group {
        groups: Vec<NodeId>,
        accounts: Vec<NodeId>,
    },
}

#[derive(Debug)]
pub(super) struct Node {
    name: String,
    credit: bool,
    figures: Figures,
    samples: Vec<BalancePayload>,
    properties: HashMap<String, String>,
    parent: Option<NodeId>,
    pub(super) kind: NodeKind,
}

impl Node {
    pub(super) fn account(parent: Option<NodeId>, p: AccountBalancesPayload) -> Self {
        Self {
            name: p.name,
            credit: p.credit,
            figures: Figures {
                cumulative_balance: p.cumulative_balance.unwrap_or_default(),
                cumulative_credit: p.cumulative_credit.unwrap_or_default(),
                cumulative_debit: p.cumulative_debit.unwrap_or_default(),
                period_balance: p.period_balance.unwrap_or_default(),
                period_credit: p.period_credit.unwrap_or_default(),
                period_debit: p.period_debit.unwrap_or_default(),
            },
            samples: p.balances,
            properties: p.properties,
            parent,
            kind: NodeKind::Account,
        }
    }

    /// Child lists are attached by the report once the children exist.
    pub(super) fn group(parent: Option<NodeId>, p: GroupBalancesPayload) -> Self {
        Self {
            name: p.name,
            credit: p.credit,
            figures: Figures {
                cumulative_balance: p.cumulative_balance.unwrap_or_default(),
                cumulative_credit: p.cumulative_credit.unwrap_or_default(),
                cumulative_debit: p.cumulative_debit.unwrap_or_default(),
                period_balance: p.period_balance.unwrap_or_default(),
                period_credit: p.period_credit.unwrap_or_default(),
                period_debit: p.period_debit.unwrap_or_default(),
            },
            samples: p.balances,
            properties: p.properties,
            parent,
            kind: NodeKind::Group {
                groups: Vec::new(),
                accounts: Vec::new(),
            },
        }
    }
}

/// A node of the balances tree: an account leaf or a group branch.
///
/// Handles are `Copy` and borrow the owning [`BalancesReport`]; they cannot outlive it.
#[derive(Clone, Copy)]
pub struct BalancesContainer<'r> {
    report: &'r BalancesReport,
    id: NodeId,
}

impl<'r> BalancesContainer<'r> {
    pub(super) fn new(report: &'r BalancesReport, id: NodeId) -> Self {
        Self { report, id }
    }

    fn node(&self) -> &'r Node {
        self.report.node(self.id)
    }

    pub fn balances_report(&self) -> &'r BalancesReport {
        self.report
    }

    /// The account or group name. Unique among siblings only.
    pub fn name(&self) -> &'r str {
        &self.node().name
    }

    pub fn kind(&self) -> ContainerKind {
        match self.node().kind {
            NodeKind::Account => ContainerKind::Account,
            NodeKind::Group { .. } => ContainerKind::Group,
        }
    }

    pub fn is_from_account(&self) -> bool {
        self.kind() == ContainerKind::Account
    }

    pub fn is_from_group(&self) -> bool {
        self.kind() == ContainerKind::Group
    }

    /// Credit nature. For groups the server reports true only when all accounts below agree.
    pub fn is_credit(&self) -> bool {
        self.node().credit
    }

    /// `None` at the roots of the report.
    pub fn parent(&self) -> Option<BalancesContainer<'r>> {
        self.node().parent.map(|id| self.report.container(id))
    }

    pub fn account(&self) -> Option<&'r Account> {
        self.report.book().account(self.name())
    }

    pub fn group(&self) -> Option<&'r Group> {
        self.report.book().group(self.name())
    }

    pub fn raw(&self, figure: Figure) -> Decimal {
        self.node().figures.get(figure)
    }

    pub fn representative(&self, figure: Figure) -> Decimal {
        representative_value(self.raw(figure), self.is_credit())
    }

    pub fn cumulative_balance(&self) -> Decimal {
        self.representative(Figure::CumulativeBalance)
    }

    pub fn cumulative_balance_raw(&self) -> Decimal {
        self.raw(Figure::CumulativeBalance)
    }

    pub fn cumulative_credit(&self) -> Decimal {
        self.raw(Figure::CumulativeCredit)
    }

    pub fn cumulative_debit(&self) -> Decimal {
        self.raw(Figure::CumulativeDebit)
    }

    pub fn period_balance(&self) -> Decimal {
        self.representative(Figure::PeriodBalance)
    }

    pub fn period_balance_raw(&self) -> Decimal {
        self.raw(Figure::PeriodBalance)
    }

    pub fn period_credit(&self) -> Decimal {
        self.raw(Figure::PeriodCredit)
    }

    pub fn period_debit(&self) -> Decimal {
        self.raw(Figure::PeriodDebit)
    }

    fn format(&self, value: Decimal) -> String {
        self.report.book().format_value(value)
    }

    pub fn cumulative_balance_text(&self) -> String {
        self.format(self.cumulative_balance())
    }

    pub fn cumulative_balance_raw_text(&self) -> String {
        self.format(self.cumulative_balance_raw())
    }

    pub fn cumulative_credit_text(&self) -> String {
        self.format(self.cumulative_credit())
    }

    pub fn cumulative_debit_text(&self) -> String {
        self.format(self.cumulative_debit())
    }

    pub fn period_balance_text(&self) -> String {
        self.format(self.period_balance())
    }

    pub fn period_balance_raw_text(&self) -> String {
        self.format(self.period_balance_raw())
    }

    pub fn period_credit_text(&self) -> String {
        self.format(self.period_credit())
    }

    pub fn period_debit_text(&self) -> String {
        self.format(self.period_debit())
    }

    /// Dated samples in payload order; empty when the server sent none.
    pub fn balances(&self) -> Vec<Balance<'r>> {
        self.node()
            .samples
            .iter()
            .map(|s| Balance::new(*self, s))
            .collect()
    }

    pub fn properties(&self) -> &'r HashMap<String, String> {
        &self.node().properties
    }

    /// First non-blank value among `keys`.
    pub fn property(&self, keys: &[&str]) -> Option<&'r str> {
        first_property(&self.node().properties, keys)
    }

    /// True when at least one direct child is a group.
    pub fn has_group_balances(&self) -> bool {
        match &self.node().kind {
            NodeKind::Account => false,
            NodeKind::Group { groups, .. } => !groups.is_empty(),
        }
    }

    /// Direct children: child groups first, then child accounts. Empty for accounts.
    pub fn balances_containers(&self) -> Vec<BalancesContainer<'r>> {
        match &self.node().kind {
            NodeKind::Account => Vec::new(),
            NodeKind::Group { groups, accounts } => groups
                .iter()
                .chain(accounts.iter())
                .map(|&id| self.report.container(id))
                .collect(),
        }
    }

    /// Depth-first search of this subtree, `self` included, by exact name.
    ///
    /// Accounts have no subtree and always answer `None`. Names repeat across
    /// depths, so the first hit in [`balances_containers`](Self::balances_containers)
    /// order is returned.
    pub fn balances_container(&self, name: &str) -> Option<BalancesContainer<'r>> {
        match self.node().kind {
            NodeKind::Account => None,
            NodeKind::Group { .. } => self.search(name),
        }
    }

    fn search(&self, name: &str) -> Option<BalancesContainer<'r>> {
        if self.name() == name {
            return Some(*self);
        }
        self.balances_containers()
            .into_iter()
            .find_map(|child| child.search(name))
    }

    /// Account leaves under this container; an account yields itself.
    pub fn account_balances_containers(&self) -> Vec<BalancesContainer<'r>> {
        match self.node().kind {
            NodeKind::Account => vec![*self],
            NodeKind::Group { .. } => self
                .balances_containers()
                .into_iter()
                .flat_map(|c| c.account_balances_containers())
                .collect(),
        }
    }

    pub fn create_data_table(&self) -> BalancesDataTableBuilder<'r> {
        let containers = match self.kind() {
            ContainerKind::Account => vec![*self],
            ContainerKind::Group => self.balances_containers(),
        };
        BalancesDataTableBuilder::new(
            self.report.book(),
            containers,
            self.report.periodicity(),
        )
    }
}

impl PartialEq for BalancesContainer<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.report, other.report) && self.id == other.id
    }
}

impl Eq for BalancesContainer<'_> {}

impl fmt::Debug for BalancesContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BalancesContainer")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("credit", &self.is_credit())
            .finish()
    }
}
