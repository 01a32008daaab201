use thiserror::Error;

use crate::domain::{Cents, LedgerError, ParseCentsError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: Cents,
        requested: Cents,
    },

    #[error("Invalid account number or password")]
    LoginFailed,
}

impl AppError {
    /// Lift a ledger failure for `account` to the application taxonomy.
    pub(crate) fn from_ledger(account: &str, err: LedgerError) -> Self {
        match err {
            LedgerError::NonPositiveAmount { .. } | LedgerError::BalanceOverflow { .. } => {
                AppError::InvalidAmount(err.to_string())
            }
            LedgerError::InsufficientFunds { balance, requested } => AppError::InsufficientFunds {
                account: account.to_string(),
                balance,
                requested,
            },
        }
    }
}

impl From<ParseCentsError> for AppError {
    fn from(err: ParseCentsError) -> Self {
        AppError::InvalidAmount(err.to_string())
    }
}
