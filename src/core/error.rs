use std::collections::TryReserveError;
use std::fmt;
use std::io;

use thiserror::Error;

use crate::core::transaction::Amount;

/// What kind of record an error refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Group,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Group => write!(f, "group"),
            EntityKind::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Occurs when creating a group or user under a name
    /// that is already taken.
    #[error("{kind} already exists: {name}")]
    AlreadyExists { kind: EntityKind, name: String },
    /// Occurs when referencing a group or user which is not registered.
    #[error("no such {kind}: {name}")]
    NotFound { kind: EntityKind, name: String },
    /// Occurs when a query needs at least one user in the group.
    #[error("group has no users: {0}")]
    EmptyGroup(String),
    /// Occurs when an amount, or the balance it would produce,
    /// is NaN or infinite.
    #[error("invalid amount for {name}: {amount}")]
    InvalidAmount { name: String, amount: Amount },
    /// Storage for a new record could not be reserved.
    /// Unlike the other variants this one is not recoverable.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl LedgerError {
    pub fn already_exists(kind: EntityKind, name: &str) -> Self {
        Self::AlreadyExists { kind, name: name.to_owned() }
    }

    pub fn not_found(kind: EntityKind, name: &str) -> Self {
        Self::NotFound { kind, name: name.to_owned() }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::OutOfMemory(_))
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Copy `name` into freshly reserved storage, reporting allocation
/// failure instead of aborting.
pub(crate) fn owned_name(name: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(name.len())?;
    owned.push_str(name);
    return Ok(owned);
}
