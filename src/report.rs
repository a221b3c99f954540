//! Line-oriented text output for ledger queries.
//!
//! Every item goes on its own line. Listings that have nothing to show
//! print a single blank line, except recent transactions, which print
//! nothing at all.
use std::io::Write;

use crate::core::{Amount, Group, Ledger, LedgerResult};

pub struct Report<W: Write> {
    out: W,
    currency_symbol: String,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, currency_symbol: &str) -> Self {
        Report { out, currency_symbol: currency_symbol.to_owned() }
    }

    /// Report using the currency symbol configured for `ledger`.
    pub fn for_ledger(out: W, ledger: &Ledger) -> Self {
        Self::new(out, &ledger.config().currency_symbol)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn lines<I, T>(&mut self, items: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = T>,
        T: std::fmt::Display,
    {
        let mut empty = true;
        for item in items {
            writeln!(self.out, "{}", item)?;
            empty = false;
        }
        if empty {
            writeln!(self.out)?;
        }
        return Ok(());
    }

    fn money(&self, amount: Amount) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    pub fn list_groups(&mut self, ledger: &Ledger) -> LedgerResult<()> {
        self.lines(ledger.group_names())
    }

    pub fn list_users(&mut self, group: &Group) -> LedgerResult<()> {
        self.lines(group.users().iter().map(|user| user.name()))
    }

    pub fn user_balance(&mut self, group: &Group, name: &str) -> LedgerResult<()> {
        let balance = group.user_balance(name)?;
        let line = self.money(balance);
        writeln!(self.out, "{}", line)?;
        return Ok(());
    }

    pub fn under_paid(&mut self, group: &Group) -> LedgerResult<()> {
        let users = group.under_paid()?;
        self.lines(users.into_iter().map(|user| user.name()))
    }

    pub fn recent_transactions(&mut self, group: &Group, count: i64) -> LedgerResult<()> {
        for transaction in group.recent_transactions(count) {
            writeln!(self.out, "{}", transaction)?;
        }
        return Ok(());
    }
}
