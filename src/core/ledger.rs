use log::debug;
use serde::Serialize;

use crate::config::LedgerConfig;
use crate::core::error::{EntityKind, LedgerError, LedgerResult};
use crate::core::group::Group;

/// All groups, in the order they were created.
#[derive(Serialize)]
pub struct Ledger {
    groups: Vec<Group>,
    #[serde(skip)]
    config: LedgerConfig,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Ledger {
        Ledger { groups: Vec::new(), config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn groups(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(Group::name)
    }

    pub fn add_group(&mut self, name: &str) -> LedgerResult<()> {
        if self.find_group(name).is_some() {
            return Err(LedgerError::already_exists(EntityKind::Group, name));
        }

        let group = Group::try_new(name)?;
        self.groups.try_reserve(1)?;
        self.groups.push(group);
        debug!("added group {}", name);
        return Ok(());
    }

    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name() == name)
    }

    pub fn find_group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.name() == name)
    }

    /// Like [`Ledger::find_group_mut`], turning absence into an error.
    pub fn group_mut(&mut self, name: &str) -> LedgerResult<&mut Group> {
        self.find_group_mut(name)
            .ok_or_else(|| LedgerError::not_found(EntityKind::Group, name))
    }

    pub fn group(&self, name: &str) -> LedgerResult<&Group> {
        self.find_group(name)
            .ok_or_else(|| LedgerError::not_found(EntityKind::Group, name))
    }
}
