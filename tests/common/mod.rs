// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use teller::application::BankService;
use teller::config::{BankConfig, SeedAccount};

/// Standard test configuration: two seeded accounts and a known password.
pub fn test_config() -> BankConfig {
    BankConfig {
        bank_name: "GTT Bank".to_string(),
        currency_symbol: "$".to_string(),
        password: Some("hunter2".to_string()),
        accounts: vec![
            SeedAccount {
                id: "12345678".to_string(),
                holder_name: None,
            },
            SeedAccount {
                id: "87654321".to_string(),
                holder_name: Some("Ada Lovelace".to_string()),
            },
        ],
    }
}

/// Helper to create a seeded test service.
pub fn test_service() -> BankService {
    BankService::from_config(test_config()).expect("seed accounts are unique")
}
