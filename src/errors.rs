use thiserror::Error;

/// Error type that captures the model's hard-miss failures.
///
/// Name lookups miss softly by returning `None`; only identity-based
/// removal of an absent entity produces one of these.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Person not found: {0}")]
    PersonNotFound(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
}

pub type Result<T> = std::result::Result<T, BalanceError>;
