use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Bank configuration. The source variants disagreed on currency symbol,
/// message branding and whether accounts carry a holder name, so all of that
/// lives here instead of in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Display name used by the shell banner.
    pub bank_name: String,

    /// Symbol prefixed to amounts in shell output.
    pub currency_symbol: String,

    /// Shared login password. When unset, every login attempt is refused;
    /// there is deliberately no built-in fallback value.
    pub password: Option<String>,

    /// Accounts opened at startup, each with balance zero.
    pub accounts: Vec<SeedAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub id: String,
    #[serde(default)]
    pub holder_name: Option<String>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_name: "Teller".to_string(),
            currency_symbol: "$".to_string(),
            password: None,
            accounts: Vec::new(),
        }
    }
}

impl BankConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BankConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert!(config.password.is_none());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: BankConfig =
            serde_json::from_str(r#"{"bank_name": "GTT Bank"}"#).unwrap();
        assert_eq!(config.bank_name, "GTT Bank");
        assert_eq!(config.currency_symbol, "$");
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_seed_accounts_json() {
        let config: BankConfig = serde_json::from_str(
            r#"{
                "currency_symbol": "₹",
                "password": "hunter2",
                "accounts": [
                    {"id": "12345678"},
                    {"id": "87654321", "holder_name": "Ada Lovelace"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.accounts[0].holder_name, None);
        assert_eq!(
            config.accounts[1].holder_name.as_deref(),
            Some("Ada Lovelace")
        );
    }
}
