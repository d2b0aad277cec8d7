//! The account and its owned transaction collections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::domain::transaction::Transaction;
use crate::errors::{BalanceError, Result};

/// A named account holding the transactions posted against it.
///
/// The four collections are owned exclusively by the account and each
/// holds only the matching [`Transaction`] variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    /// Back-reference to the owning person. Not an ownership relation;
    /// removing the person leaves this id dangling.
    pub owner_id: Uuid,
    #[serde(default)]
    pub incomes: Vec<Transaction>,
    #[serde(default)]
    pub bills: Vec<Transaction>,
    #[serde(default)]
    pub transfers_in: Vec<Transaction>,
    #[serde(default)]
    pub transfers_out: Vec<Transaction>,
}

impl Account {
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner_id,
            incomes: Vec::new(),
            bills: Vec::new(),
            transfers_in: Vec::new(),
            transfers_out: Vec::new(),
        }
    }

    /// Appends a new income and returns its id. No duplicate check.
    pub fn add_income(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Uuid {
        let income = Transaction::income(name, amount, date, self.id);
        let id = income.id;
        self.incomes.push(income);
        id
    }

    /// Appends a new bill referencing `category_id` and returns its id.
    /// The category id is stored unchecked.
    pub fn add_bill(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        category_id: Uuid,
    ) -> Uuid {
        let bill = Transaction::bill(name, amount, date, self.id, category_id);
        let id = bill.id;
        self.bills.push(bill);
        id
    }

    /// Appends an outgoing transfer towards `target_account_id`.
    pub fn add_transfer_out(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        target_account_id: Uuid,
    ) -> Uuid {
        let transfer = Transaction::transfer_out(name, amount, date, self.id, target_account_id);
        let id = transfer.id;
        self.transfers_out.push(transfer);
        id
    }

    /// Appends an incoming transfer sent by `source_account_id`.
    pub fn add_transfer_in(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        source_account_id: Uuid,
    ) -> Uuid {
        let transfer = Transaction::transfer_in(name, amount, date, self.id, source_account_id);
        let id = transfer.id;
        self.transfers_in.push(transfer);
        id
    }

    /// Removes the income identified by `id`, returning the removed
    /// instance. Removal of an absent id is a hard miss.
    pub fn remove_income(&mut self, id: Uuid) -> Result<Transaction> {
        remove_by_id(&mut self.incomes, id)
    }

    pub fn remove_bill(&mut self, id: Uuid) -> Result<Transaction> {
        remove_by_id(&mut self.bills, id)
    }

    pub fn remove_transfer_in(&mut self, id: Uuid) -> Result<Transaction> {
        remove_by_id(&mut self.transfers_in, id)
    }

    pub fn remove_transfer_out(&mut self, id: Uuid) -> Result<Transaction> {
        remove_by_id(&mut self.transfers_out, id)
    }

    /// Live view of the incomes. Callers cannot mutate through it.
    pub fn incomes(&self) -> &[Transaction] {
        &self.incomes
    }

    pub fn bills(&self) -> &[Transaction] {
        &self.bills
    }

    pub fn transfers_in(&self) -> &[Transaction] {
        &self.transfers_in
    }

    pub fn transfers_out(&self) -> &[Transaction] {
        &self.transfers_out
    }

    /// Finds a transaction of any variant by id across the four
    /// collections.
    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.incomes
            .iter()
            .chain(self.bills.iter())
            .chain(self.transfers_in.iter())
            .chain(self.transfers_out.iter())
            .find(|txn| txn.id == id)
    }
}

fn remove_by_id(transactions: &mut Vec<Transaction>, id: Uuid) -> Result<Transaction> {
    let index = transactions
        .iter()
        .position(|txn| txn.id == id)
        .ok_or_else(|| BalanceError::TransactionNotFound(id.to_string()))?;
    Ok(transactions.remove(index))
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        self.name.clone()
    }
}
