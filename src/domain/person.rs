//! The person and the accounts they own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::common::*;
use crate::errors::{BalanceError, Result};

/// A named person owning an ordered set of accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// Creates an account owned by this person and returns its id.
    /// Account names are not required to be unique.
    pub fn create_account(&mut self, name: impl Into<String>) -> Uuid {
        let account = Account::new(name, self.id);
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// Returns the first account whose name matches exactly, or `None`.
    pub fn account_by_name(&self, search_name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.name == search_name)
    }

    pub fn account_by_name_mut(&mut self, search_name: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.name == search_name)
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Ordered account names, parallel to `accounts`.
    pub fn account_names(&self) -> Vec<String> {
        self.accounts
            .iter()
            .map(|account| account.name.clone())
            .collect()
    }

    /// Removes the account identified by `id`. Hard miss on absent ids;
    /// owned transactions go with the account, back-references elsewhere
    /// are left untouched.
    pub fn remove_account(&mut self, id: Uuid) -> Result<Account> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(|| BalanceError::AccountNotFound(id.to_string()))?;
        Ok(self.accounts.remove(index))
    }

    /// Live view of the owned accounts.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Identifiable for Person {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Person {
    fn display_label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_account_is_retrievable_by_name() {
        let mut person = Person::new("Jeff");
        person.create_account("JeffsAccount");

        let account = person.account_by_name("JeffsAccount").expect("account");
        assert_eq!(account.name, "JeffsAccount");
        assert_eq!(account.owner_id, person.id);
    }

    #[test]
    fn lookup_is_case_sensitive_and_misses_softly() {
        let mut person = Person::new("Jeff");
        person.create_account("Savings");

        assert!(person.account_by_name("savings").is_none());
        assert!(person.account_by_name("NoSuchAccount").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first_match() {
        let mut person = Person::new("Jeff");
        let first = person.create_account("Spending");
        person.create_account("Spending");

        assert_eq!(person.accounts().len(), 2);
        assert_eq!(person.account_by_name("Spending").unwrap().id, first);
    }

    #[test]
    fn account_names_parallel_accounts() {
        let mut person = Person::new("Jeff");
        person.create_account("Current");
        person.create_account("Savings");
        assert_eq!(person.account_names(), vec!["Current", "Savings"]);
    }

    #[test]
    fn remove_account_misses_hard() {
        let mut person = Person::new("Jeff");
        let err = person
            .remove_account(Uuid::new_v4())
            .expect_err("absent id must be a hard miss");
        assert!(matches!(err, BalanceError::AccountNotFound(_)));
    }
}
