pub mod error;
pub mod user;
pub mod transaction;
pub mod group;
pub mod ledger;

pub use error::{EntityKind, LedgerError, LedgerResult};
pub use user::{User, UserLookup, UserRegistry};
pub use transaction::{Amount, Transaction, TransactionLog};
pub use group::{BalanceDrift, Group};
pub use ledger::Ledger;
