use log::{debug, info, warn};
use serde::Serialize;

use crate::core::error::{EntityKind, LedgerError, LedgerResult, owned_name};
use crate::core::transaction::{Amount, Transaction, TransactionLog};
use crate::core::user::{User, UserLookup, UserRegistry};

/// A user whose recorded balance disagrees with its transactions.
#[derive(Clone, PartialEq, Debug)]
pub struct BalanceDrift {
    pub name: String,
    pub recorded: Amount,
    pub expected: Amount,
}

#[derive(Serialize)]
pub struct Group {
    name: String,
    users: UserRegistry,
    transactions: TransactionLog,
}

impl Group {
    pub fn new(name: &str) -> Group {
        Group {
            name: name.to_owned(),
            users: UserRegistry::new(),
            transactions: TransactionLog::new(),
        }
    }

    /// Like [`Group::new`], reporting allocation failure for the name.
    pub(crate) fn try_new(name: &str) -> LedgerResult<Group> {
        Ok(Group {
            name: owned_name(name)?,
            users: UserRegistry::new(),
            transactions: TransactionLog::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Users in ascending balance order.
    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    /// Transactions, most recent first.
    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    pub fn add_user(&mut self, name: &str) -> LedgerResult<()> {
        if self.users.get(name).is_some() {
            return Err(LedgerError::already_exists(EntityKind::User, name));
        }
        self.users.insert_new(name)?;
        debug!("group {}: added user {}", self.name, name);
        return Ok(());
    }

    pub fn find_prev_user(&self, name: &str) -> UserLookup<'_> {
        self.users.find_prev(name)
    }

    /// Remove the user and every transaction recorded for it.
    pub fn remove_user(&mut self, name: &str) -> LedgerResult<()> {
        if self.users.remove(name).is_none() {
            return Err(LedgerError::not_found(EntityKind::User, name));
        }
        let purged = self.purge_transactions(name);
        info!("group {}: removed user {} and {} transaction(s)", self.name, name, purged);
        return Ok(());
    }

    pub fn user_balance(&self, name: &str) -> LedgerResult<Amount> {
        self.find_prev_user(name).user()
            .map(User::balance)
            .ok_or_else(|| LedgerError::not_found(EntityKind::User, name))
    }

    /// Every user tied for the lowest balance, in registry order.
    pub fn under_paid(&self) -> LedgerResult<Vec<&User>> {
        if self.users.is_empty() {
            return Err(LedgerError::EmptyGroup(self.name.clone()));
        }
        return Ok(self.users.lowest().collect());
    }

    /// Record `amount` for the user and move it to its new place.
    /// Amounts that are not finite, or that would make the balance
    /// overflow to infinity, are rejected and nothing changes.
    pub fn add_transaction(&mut self, name: &str, amount: Amount) -> LedgerResult<()> {
        let idx = self.users.position(name)
            .ok_or_else(|| LedgerError::not_found(EntityKind::User, name))?;

        let balance = self.users.iter().nth(idx).map_or(0.0, User::balance);
        if !amount.is_finite() || !(balance + amount).is_finite() {
            return Err(LedgerError::InvalidAmount { name: name.to_owned(), amount });
        }

        self.transactions.record(name, amount)?;
        let new_idx = self.users.credit(idx, amount);
        debug!("group {}: {} {:+.2}, position {} -> {}", self.name, name, amount, idx, new_idx);
        return Ok(());
    }

    pub fn recent_transactions(&self, count: i64) -> impl Iterator<Item = &Transaction> {
        self.transactions.recent(count)
    }

    /// Returns the number of transactions removed.
    pub fn purge_transactions(&mut self, name: &str) -> usize {
        self.transactions.purge(name)
    }

    /// Compare every balance with the sum of its transactions.
    /// Replays the whole log, so it is meant to be run on demand.
    pub fn audit(&self) -> Vec<BalanceDrift> {
        self.users.iter()
            .filter_map(|user| {
                let expected = self.transactions.total_for(user.name());
                if expected == user.balance() {
                    None
                } else {
                    Some(BalanceDrift {
                        name: user.name().to_owned(),
                        recorded: user.balance(),
                        expected,
                    })
                }
            })
            .collect()
    }

    /// Reset drifted balances to the sum of their transactions.
    /// Returns the drifts that were repaired.
    pub fn consistency_check(&mut self) -> Vec<BalanceDrift> {
        let drifts = self.audit();
        if drifts.is_empty() {
            return drifts;
        }

        for drift in &drifts {
            warn!("group {}: balance of {} drifted from {} to {}",
                self.name, drift.name, drift.expected, drift.recorded);
            self.users.set_balance(&drift.name, drift.expected);
        }
        self.users.sort();
        return drifts;
    }

    #[cfg(test)]
    pub(crate) fn users_mut(&mut self) -> &mut UserRegistry {
        &mut self.users
    }
}
