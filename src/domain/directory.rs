use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Account, AccountId};

/// The account directory: every known account, keyed by identifier.
/// Accounts are added at startup or through an explicit create action and are
/// never removed within a session.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Directory {
    accounts: HashMap<AccountId, Account>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Insert a new account. Returns the account back if the identifier is
    /// already taken; existing entries are never overwritten.
    pub fn insert(&mut self, account: Account) -> Result<(), Account> {
        if self.accounts.contains_key(&account.id) {
            return Err(account);
        }
        self.accounts.insert(account.id.clone(), account);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All account identifiers, sorted for stable output.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
