use std::fmt;

use serde::Serialize;

use crate::core::error::{owned_name, LedgerResult};
use crate::core::transaction::Amount;

#[derive(Clone, PartialEq, Serialize)]
pub struct User {
    name: String,
    balance: Amount,
}

impl User {
    pub fn new(name: &str) -> User {
        User { name: name.to_owned(), balance: 0.0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {} ({:.2})", self.name, self.balance)
    }
}

/// Result of looking a user up together with the user in front of it.
#[derive(Debug, PartialEq)]
pub enum UserLookup<'a> {
    /// The user is first in the registry, nothing precedes it.
    Head(&'a User),
    WithPredecessor { prev: &'a User, user: &'a User },
    NotFound,
}

impl<'a> UserLookup<'a> {
    pub fn user(&self) -> Option<&'a User> {
        match *self {
            UserLookup::Head(user) => Some(user),
            UserLookup::WithPredecessor { user, .. } => Some(user),
            UserLookup::NotFound => None,
        }
    }
}

/// Users of one group, kept sorted by ascending balance.
/// Users with equal balances keep their relative order.
#[derive(Default, Serialize)]
#[serde(transparent)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> UserRegistry {
        UserRegistry { users: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|user| user.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    pub fn find_prev(&self, name: &str) -> UserLookup<'_> {
        match self.position(name) {
            Some(0) => UserLookup::Head(&self.users[0]),
            Some(idx) => UserLookup::WithPredecessor {
                prev: &self.users[idx - 1],
                user: &self.users[idx],
            },
            None => UserLookup::NotFound,
        }
    }

    /// Insert a fresh zero-balance user in front of everyone not below
    /// zero. With no negative balances this is the head; otherwise the
    /// user lands right after the negative run instead, so the ordering
    /// still holds. Callers check for duplicates first.
    pub(crate) fn insert_new(&mut self, name: &str) -> LedgerResult<usize> {
        let name = owned_name(name)?;
        self.users.try_reserve(1)?;
        let idx = self.users.iter()
            .position(|user| user.balance >= 0.0)
            .unwrap_or(self.users.len());
        self.users.insert(idx, User { name, balance: 0.0 });
        return Ok(idx);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<User> {
        let idx = self.position(name)?;
        Some(self.users.remove(idx))
    }

    /// Add `amount` to the balance of the user at `idx` and move it
    /// to where the ordering holds again. Returns the new index.
    pub(crate) fn credit(&mut self, idx: usize, amount: Amount) -> usize {
        self.users[idx].balance += amount;
        self.reposition(idx)
    }

    /// Move the user at `idx` in front of the first remaining user with a
    /// strictly greater balance, or to the tail if there is none. The other
    /// users keep their relative order.
    pub(crate) fn reposition(&mut self, idx: usize) -> usize {
        if self.users.len() <= 1 {
            return idx;
        }

        let user = self.users.remove(idx);
        let target = self.users.iter()
            .position(|other| other.balance > user.balance)
            .unwrap_or(self.users.len());
        self.users.insert(target, user);
        return target;
    }

    pub(crate) fn set_balance(&mut self, name: &str, balance: Amount) {
        if let Some(user) = self.users.iter_mut().find(|user| user.name == name) {
            user.balance = balance;
        }
    }

    /// Restore ordering after arbitrary balance changes.
    pub(crate) fn sort(&mut self) {
        self.users.sort_by(|a, b| a.balance.total_cmp(&b.balance));
    }

    pub fn is_sorted(&self) -> bool {
        self.users.windows(2).all(|pair| pair[0].balance <= pair[1].balance)
    }

    /// Every user whose balance is not above the first user's.
    pub fn lowest(&self) -> impl Iterator<Item = &User> {
        let floor = self.users.first().map(|user| user.balance);
        self.users.iter()
            .filter(move |user| floor.map_or(false, |floor| user.balance <= floor))
    }
}
