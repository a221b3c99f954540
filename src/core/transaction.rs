use std::collections::VecDeque;

use serde::Serialize;

use crate::core::error::{owned_name, LedgerResult};

pub type Amount = f64;

/// A balance adjustment for one user. The user is referenced by name
/// only; the log does not own or borrow the user record.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Transaction {
    pub user_name: String,
    pub amount: Amount,
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {:.2}", self.user_name, self.amount)
    }
}

impl Transaction {
    pub fn new(user_name: &str, amount: Amount) -> Transaction {
        Transaction { user_name: user_name.to_owned(), amount }
    }
}

/// Transactions of one group, most recent first.
#[derive(Default, Serialize)]
#[serde(transparent)]
pub struct TransactionLog {
    entries: VecDeque<Transaction>,
}

impl TransactionLog {
    pub fn new() -> TransactionLog {
        TransactionLog { entries: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Transaction> {
        self.entries.iter()
    }

    pub(crate) fn record(&mut self, user_name: &str, amount: Amount) -> LedgerResult<()> {
        let user_name = owned_name(user_name)?;
        self.entries.try_reserve(1)?;
        self.entries.push_front(Transaction { user_name, amount });
        return Ok(());
    }

    /// Up to `count` entries, newest first. A non-positive count yields nothing.
    pub fn recent(&self, count: i64) -> impl Iterator<Item = &Transaction> {
        let count = usize::try_from(count).unwrap_or(0);
        self.entries.iter().take(count)
    }

    /// Drop every entry of `user_name`, returning how many were removed.
    pub(crate) fn purge(&mut self, user_name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|transaction| transaction.user_name != user_name);
        return before - self.entries.len();
    }

    /// Sum of the amounts recorded for `user_name`, added up oldest first.
    pub fn total_for(&self, user_name: &str) -> Amount {
        self.entries.iter().rev()
            .filter(|transaction| transaction.user_name == user_name)
            .fold(0.0, |total, transaction| total + transaction.amount)
    }
}
