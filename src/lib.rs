//! In-memory ledger for shared-expense groups.
//!
//! A [`Ledger`] holds named groups. Each [`Group`] keeps its users sorted by
//! ascending balance and logs every balance change as a [`Transaction`],
//! most recent first. [`report::Report`] renders query results as text.
mod core;
pub mod config;
pub mod report;

pub use crate::core::{Ledger, Group, User, Transaction, UserRegistry, TransactionLog};
pub use crate::core::{Amount, BalanceDrift, EntityKind, LedgerError, LedgerResult, UserLookup};
pub use crate::core::{error, group, ledger, transaction, user};
pub use crate::config::LedgerConfig;
