use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{format_cents, Cents};

pub type AccountId = String;

/// A single bank account: a non-negative balance plus an append-only log of
/// human-readable transaction descriptions. The balance can only change
/// through [`Account::deposit`] and [`Account::withdraw`], both of which
/// validate before mutating, so `balance >= 0` holds at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub holder_name: Option<String>,
    pub created_at: DateTime<Utc>,
    balance: Cents,
    history: Vec<String>,
}

impl Account {
    /// Open an account with a zero balance. The history starts with a single
    /// creation entry.
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            holder_name: None,
            created_at: Utc::now(),
            balance: 0,
            history: vec!["Account created with balance: 0.00".to_string()],
        }
    }

    pub fn with_holder_name(mut self, name: impl Into<String>) -> Self {
        self.holder_name = Some(name.into());
        self
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Read-only view of the transaction log, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Add `amount` to the balance. Fails if the amount is not positive or
    /// would push the balance past what cents can represent; nothing is
    /// mutated on failure.
    pub fn deposit(&mut self, amount: Cents) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow {
                balance: self.balance,
                requested: amount,
            })?;
        self.history.push(format!("Deposited {}", format_cents(amount)));
        Ok(())
    }

    /// Subtract `amount` from the balance. Both checks run before any
    /// mutation, so a failed withdrawal leaves balance and history untouched.
    pub fn withdraw(&mut self, amount: Cents) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        self.history.push(format!("Withdrew {}", format_cents(amount)));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    NonPositiveAmount { amount: Cents },
    InsufficientFunds { balance: Cents, requested: Cents },
    BalanceOverflow { balance: Cents, requested: Cents },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NonPositiveAmount { amount } => {
                write!(f, "Amount must be positive, got {}", format_cents(*amount))
            }
            LedgerError::InsufficientFunds { balance, requested } => {
                write!(
                    f,
                    "Insufficient funds: balance {}, requested {}",
                    format_cents(*balance),
                    format_cents(*requested)
                )
            }
            LedgerError::BalanceOverflow { balance, requested } => {
                write!(
                    f,
                    "Deposit of {} cannot be added to balance {}",
                    format_cents(*requested),
                    format_cents(*balance)
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}
