// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::container::{BalancesContainer, Node, NodeId, NodeKind};
use crate::book::Book;
use crate::error::{BookclipError, Result};
use crate::models::{AccountBalancesPayload, BalancesPayload, GroupBalancesPayload, Periodicity};
use crate::table::BalancesDataTableBuilder;

/// Root of a balances query answer. Owns the whole container tree.
#[derive(Debug)]
pub struct BalancesReport {
    book: Book,
    periodicity: Periodicity,
    nodes: Vec<Node>,
    account_roots: Vec<NodeId>,
    group_roots: Vec<NodeId>,
}

impl BalancesReport {
    pub fn new(book: Book, payload: BalancesPayload) -> Self {
        let mut report = Self {
            book,
            periodicity: payload.periodicity,
            nodes: Vec::new(),
            account_roots: Vec::new(),
            group_roots: Vec::new(),
        };
        for account in payload.account_balances {
            let id = report.push_account(None, account);
            report.account_roots.push(id);
        }
        for group in payload.group_balances {
            let id = report.push_group(None, group);
            report.group_roots.push(id);
        }
        report
    }

    pub fn from_json(book: Book, json: &str) -> Result<Self> {
        let payload: BalancesPayload = serde_json::from_str(json)?;
        Ok(Self::new(book, payload))
    }

    fn push_account(&mut self, parent: Option<NodeId>, p: AccountBalancesPayload) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::account(parent, p));
        id
    }

    fn push_group(&mut self, parent: Option<NodeId>, mut p: GroupBalancesPayload) -> NodeId {
        let id = self.nodes.len();
        let child_groups = std::mem::take(&mut p.group_balances);
        let child_accounts = std::mem::take(&mut p.account_balances);
        self.nodes.push(Node::group(parent, p));

        let groups: Vec<NodeId> = child_groups
            .into_iter()
            .map(|g| self.push_group(Some(id), g))
            .collect();
        let accounts: Vec<NodeId> = child_accounts
            .into_iter()
            .map(|a| self.push_account(Some(id), a))
            .collect();
        self.nodes[id].kind = NodeKind::Group { groups, accounts };
        id
    }

    pub(super) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(super) fn container(&self, id: NodeId) -> BalancesContainer<'_> {
        BalancesContainer::new(self, id)
    }

    /// The [`Book`] that generated the report.
    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    /// Top-level containers: root accounts first, then root groups.
    pub fn balances_containers(&self) -> Vec<BalancesContainer<'_>> {
        self.account_roots
            .iter()
            .chain(self.group_roots.iter())
            .map(|&id| self.container(id))
            .collect()
    }

    /// True when the query named exactly one group at the root.
    pub fn has_only_one_group(&self) -> bool {
        self.group_roots.len() == 1
    }

    /// Finds a container anywhere in the tree by exact name.
    ///
    /// Roots are tried in [`balances_containers`](Self::balances_containers) order and
    /// each root's subtree is searched depth-first before moving on, so with duplicate
    /// names the first match in that order wins.
    pub fn balances_container(&self, name: &str) -> Result<BalancesContainer<'_>> {
        self.balances_containers()
            .into_iter()
            .find_map(|root| {
                if root.name() == name {
                    Some(root)
                } else {
                    root.balances_container(name)
                }
            })
            .ok_or_else(|| BookclipError::ContainerNotFound(name.to_string()))
    }

    /// Every account leaf in the tree, groups expanded recursively.
    pub fn account_balances_containers(&self) -> Vec<BalancesContainer<'_>> {
        self.balances_containers()
            .into_iter()
            .flat_map(|c| c.account_balances_containers())
            .collect()
    }

    pub fn create_data_table(&self) -> BalancesDataTableBuilder<'_> {
        BalancesDataTableBuilder::new(&self.book, self.balances_containers(), self.periodicity)
    }
}
