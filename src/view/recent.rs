//! Recent transactions list

use super::result::Verdict;
use crate::api::types::Transaction;
use crate::consts::cli_consts::RECENT_TRANSACTIONS_LIMIT;

pub const LOADING_MESSAGE: &str = "Loading transactions...";
pub const EMPTY_MESSAGE: &str = "No transactions yet";
pub const ERROR_MESSAGE: &str = "Error loading transactions";

#[derive(Debug, Clone, PartialEq)]
pub struct RecentItem {
    pub id: u64,
    pub timestamp: String,
    pub amount: f64,
    pub verdict: Verdict,
}

impl RecentItem {
    pub fn title(&self) -> String {
        format!("Transaction #{}", self.id)
    }

    pub fn detail(&self) -> String {
        format!("{} • ${:.2}", self.timestamp, self.amount)
    }

    pub fn status_text(&self) -> String {
        format!("{} {}", self.verdict.icon(), self.verdict)
    }
}

impl From<&Transaction> for RecentItem {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            timestamp: tx.timestamp.clone(),
            amount: tx.amount,
            verdict: Verdict::from_is_fraud(tx.is_fraud),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecentList {
    #[default]
    Loading,
    Empty,
    Items(Vec<RecentItem>),
    Error,
}

impl RecentList {
    /// Builds the list from the full collection in server order.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let items: Vec<RecentItem> = newest_first(transactions, RECENT_TRANSACTIONS_LIMIT)
            .map(RecentItem::from)
            .collect();
        if items.is_empty() {
            RecentList::Empty
        } else {
            RecentList::Items(items)
        }
    }

    /// Placeholder text shown instead of items, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            RecentList::Loading => Some(LOADING_MESSAGE),
            RecentList::Empty => Some(EMPTY_MESSAGE),
            RecentList::Items(_) => None,
            RecentList::Error => Some(ERROR_MESSAGE),
        }
    }

    pub fn items(&self) -> &[RecentItem] {
        match self {
            RecentList::Items(items) => items,
            _ => &[],
        }
    }
}

/// The last `limit` transactions of an oldest-first collection, newest first.
pub fn newest_first(
    transactions: &[Transaction],
    limit: usize,
) -> impl Iterator<Item = &Transaction> {
    let start = transactions.len().saturating_sub(limit);
    transactions[start..].iter().rev()
}
