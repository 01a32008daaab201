use chrono::{DateTime, Utc};

use crate::config::BankConfig;
use crate::domain::{parse_cents, Account, AccountId, Cents, Directory};

use super::AppError;

/// Application service providing high-level operations over the account
/// directory. This is the primary interface for any client (CLI, TUI, etc.):
/// amounts arrive as free-form text and results come back as typed values or
/// [`AppError`], never panics.
#[derive(Debug)]
pub struct BankService {
    config: BankConfig,
    directory: Directory,
}

/// Result of a successful deposit or withdrawal.
#[derive(Debug)]
pub struct TransactionReceipt {
    pub account_id: AccountId,
    pub amount: Cents,
    pub balance: Cents,
}

/// One line of the directory listing.
#[derive(Debug)]
pub struct AccountSummary {
    pub id: AccountId,
    pub holder_name: Option<String>,
    pub balance: Cents,
}

/// Detailed account information, with the identifier masked for display.
#[derive(Debug)]
pub struct AccountInfo {
    pub masked_id: String,
    pub holder_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub balance: Cents,
}

impl BankService {
    /// Build a service from configuration, opening every seed account with a
    /// zero balance. Duplicate seed identifiers are an error.
    pub fn from_config(config: BankConfig) -> Result<Self, AppError> {
        let mut service = Self {
            config,
            directory: Directory::new(),
        };
        for seed in service.config.accounts.clone() {
            service.create_account(seed.id, seed.holder_name)?;
        }
        Ok(service)
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    // ========================
    // Directory operations
    // ========================

    /// Open a new zero-balance account.
    pub fn create_account(
        &mut self,
        id: impl Into<AccountId>,
        holder_name: Option<String>,
    ) -> Result<AccountSummary, AppError> {
        let id = id.into();
        let mut account = Account::new(id);
        if let Some(name) = holder_name {
            account = account.with_holder_name(name);
        }

        let summary = AccountSummary {
            id: account.id.clone(),
            holder_name: account.holder_name.clone(),
            balance: account.balance(),
        };

        self.directory
            .insert(account)
            .map_err(|rejected| AppError::AccountAlreadyExists(rejected.id))?;
        Ok(summary)
    }

    /// Check an account/password pair. Unknown identifiers and bad passwords
    /// are reported identically so the login prompt leaks nothing; when no
    /// password is configured every attempt is refused.
    pub fn login(&self, account_id: &str, password: &str) -> Result<(), AppError> {
        let known = self.directory.contains(account_id);
        let password_ok = self
            .config
            .password
            .as_deref()
            .is_some_and(|expected| expected == password);

        if known && password_ok {
            Ok(())
        } else {
            Err(AppError::LoginFailed)
        }
    }

    /// List all accounts, sorted by identifier.
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.directory
            .ids()
            .into_iter()
            .filter_map(|id| self.directory.get(id))
            .map(|account| AccountSummary {
                id: account.id.clone(),
                holder_name: account.holder_name.clone(),
                balance: account.balance(),
            })
            .collect()
    }

    /// Detailed account information with the identifier masked down to its
    /// last four characters.
    pub fn account_info(&self, account_id: &str) -> Result<AccountInfo, AppError> {
        let account = self.get(account_id)?;
        Ok(AccountInfo {
            masked_id: mask_id(&account.id),
            holder_name: account.holder_name.clone(),
            created_at: account.created_at,
            balance: account.balance(),
        })
    }

    // ========================
    // Ledger operations
    // ========================

    /// Deposit a text amount into an account.
    pub fn deposit(
        &mut self,
        account_id: &str,
        amount_text: &str,
    ) -> Result<TransactionReceipt, AppError> {
        let amount = parse_cents(amount_text)?;
        let account = self.get_mut(account_id)?;
        account
            .deposit(amount)
            .map_err(|err| AppError::from_ledger(account_id, err))?;
        Ok(TransactionReceipt {
            account_id: account_id.to_string(),
            amount,
            balance: account.balance(),
        })
    }

    /// Withdraw a text amount from an account.
    pub fn withdraw(
        &mut self,
        account_id: &str,
        amount_text: &str,
    ) -> Result<TransactionReceipt, AppError> {
        let amount = parse_cents(amount_text)?;
        let account = self.get_mut(account_id)?;
        account
            .withdraw(amount)
            .map_err(|err| AppError::from_ledger(account_id, err))?;
        Ok(TransactionReceipt {
            account_id: account_id.to_string(),
            amount,
            balance: account.balance(),
        })
    }

    /// Current balance of an account.
    pub fn balance_of(&self, account_id: &str) -> Result<Cents, AppError> {
        Ok(self.get(account_id)?.balance())
    }

    /// Full transaction log of an account, oldest first.
    pub fn history_of(&self, account_id: &str) -> Result<&[String], AppError> {
        Ok(self.get(account_id)?.history())
    }

    fn get(&self, account_id: &str) -> Result<&Account, AppError> {
        self.directory
            .get(account_id)
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }

    fn get_mut(&mut self, account_id: &str) -> Result<&mut Account, AppError> {
        self.directory
            .get_mut(account_id)
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }
}

/// Keep only the last four characters of an identifier.
fn mask_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let visible = chars.len().min(4);
    let tail: String = chars[chars.len() - visible..].iter().collect();
    format!("****{tail}")
}
