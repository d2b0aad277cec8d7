//! Domain models for account transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A single dated, named, amount-bearing financial event.
///
/// The `date` field is deliberately loose: it may hold a day-of-month
/// token such as `"1"` or `"31"`, or free-form text such as `"Variable"`
/// or `"As & When"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub date: String,
    /// Back-reference to the owning account. Not an ownership relation.
    pub account_id: Uuid,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn income(
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        account_id: Uuid,
    ) -> Self {
        Self::with_kind(name, amount, date, account_id, TransactionKind::Income)
    }

    pub fn bill(
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        account_id: Uuid,
        category_id: Uuid,
    ) -> Self {
        Self::with_kind(
            name,
            amount,
            date,
            account_id,
            TransactionKind::Bill { category_id },
        )
    }

    pub fn transfer_out(
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        account_id: Uuid,
        target_account_id: Uuid,
    ) -> Self {
        Self::with_kind(
            name,
            amount,
            date,
            account_id,
            TransactionKind::TransferOut { target_account_id },
        )
    }

    pub fn transfer_in(
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        account_id: Uuid,
        source_account_id: Uuid,
    ) -> Self {
        Self::with_kind(
            name,
            amount,
            date,
            account_id,
            TransactionKind::TransferIn { source_account_id },
        )
    }

    fn with_kind(
        name: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        account_id: Uuid,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            date: date.into(),
            account_id,
            kind,
        }
    }

    /// Returns the referenced category for bills.
    pub fn category_id(&self) -> Option<Uuid> {
        match self.kind {
            TransactionKind::Bill { category_id } => Some(category_id),
            _ => None,
        }
    }

    /// Returns the receiving account for outgoing transfers.
    pub fn target_account_id(&self) -> Option<Uuid> {
        match self.kind {
            TransactionKind::TransferOut { target_account_id } => Some(target_account_id),
            _ => None,
        }
    }

    /// Returns the sending account for incoming transfers.
    pub fn source_account_id(&self) -> Option<Uuid> {
        match self.kind {
            TransactionKind::TransferIn { source_account_id } => Some(source_account_id),
            _ => None,
        }
    }

    /// Reassigns the bill's category. Returns `false` when the transaction
    /// is not a bill; the variant is fixed at construction.
    pub fn set_category_id(&mut self, new_category_id: Uuid) -> bool {
        match &mut self.kind {
            TransactionKind::Bill { category_id } => {
                *category_id = new_category_id;
                true
            }
            _ => false,
        }
    }

    /// Reassigns the transfer target. The new id is stored unchecked; a
    /// target equal to `account_id` is caller error, not rejected.
    pub fn set_target_account_id(&mut self, new_target_id: Uuid) -> bool {
        match &mut self.kind {
            TransactionKind::TransferOut { target_account_id } => {
                *target_account_id = new_target_id;
                true
            }
            _ => false,
        }
    }

    /// Reassigns the transfer source. Stored unchecked, as with targets.
    pub fn set_source_account_id(&mut self, new_source_id: Uuid) -> bool {
        match &mut self.kind {
            TransactionKind::TransferIn { source_account_id } => {
                *source_account_id = new_source_id;
                true
            }
            _ => false,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Transaction {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl BelongsToCategory for Transaction {
    fn category_id(&self) -> Option<Uuid> {
        Transaction::category_id(self)
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.kind)
    }
}

/// Closed set of transaction variants. Each adds at most one reference
/// beyond the common record shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Bill { category_id: Uuid },
    TransferOut { target_account_id: Uuid },
    TransferIn { source_account_id: Uuid },
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Bill { .. } => "Bill",
            TransactionKind::TransferOut { .. } => "Transfer Out",
            TransactionKind::TransferIn { .. } => "Transfer In",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_accessors_miss_on_other_kinds() {
        let income = Transaction::income("Salary", 3000.0, "1", Uuid::new_v4());
        assert_eq!(income.category_id(), None);
        assert_eq!(income.target_account_id(), None);
        assert_eq!(income.source_account_id(), None);
    }

    #[test]
    fn bill_carries_its_category() {
        let category_id = Uuid::new_v4();
        let mut bill = Transaction::bill("Rent", 800.0, "28", Uuid::new_v4(), category_id);
        assert_eq!(bill.category_id(), Some(category_id));

        let replacement = Uuid::new_v4();
        assert!(bill.set_category_id(replacement));
        assert_eq!(bill.category_id(), Some(replacement));
    }

    #[test]
    fn setters_refuse_foreign_variants() {
        let mut income = Transaction::income("Salary", 3000.0, "1", Uuid::new_v4());
        assert!(!income.set_category_id(Uuid::new_v4()));
        assert!(!income.set_target_account_id(Uuid::new_v4()));
        assert_eq!(income.kind, TransactionKind::Income);
    }

    #[test]
    fn self_transfer_is_stored_unchecked() {
        let account_id = Uuid::new_v4();
        let transfer = Transaction::transfer_out("Loop", 10.0, "Variable", account_id, account_id);
        assert_eq!(transfer.target_account_id(), Some(account_id));
    }

    #[test]
    fn free_form_dates_are_kept_verbatim() {
        let txn = Transaction::income("Overtime", 120.0, "As & When", Uuid::new_v4());
        assert_eq!(txn.date, "As & When");
    }
}
