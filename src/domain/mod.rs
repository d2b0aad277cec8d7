//! Pure domain models (Person, Account, Transaction, Category).
//! No I/O, no CLI. Only data types and core enums.

pub mod account;
pub mod category;
pub mod common;
pub mod person;
pub mod transaction;

pub use account::*;
pub use category::*;
pub use common::*;
pub use person::*;
pub use transaction::*;
