use std::fs;

use anyhow::Result;
use tempfile::TempDir;
use teller::application::BankService;
use teller::config::BankConfig;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bank.json");
    fs::write(
        &path,
        r#"{
            "bank_name": "GTT Bank",
            "currency_symbol": "₹",
            "password": "hunter2",
            "accounts": [
                {"id": "12345678"},
                {"id": "87654321", "holder_name": "Ada Lovelace"}
            ]
        }"#,
    )?;

    let config = BankConfig::load(&path)?;
    assert_eq!(config.bank_name, "GTT Bank");
    assert_eq!(config.currency_symbol, "₹");

    let service = BankService::from_config(config)?;
    assert_eq!(service.list_accounts().len(), 2);
    assert!(service.login("12345678", "hunter2").is_ok());
    Ok(())
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");
    assert!(BankConfig::load(&path).is_err());
}

#[test]
fn test_load_malformed_json_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, "{not json")?;
    assert!(BankConfig::load(&path).is_err());
    Ok(())
}

#[test]
fn test_empty_config_builds_empty_bank() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, "{}")?;

    let config = BankConfig::load(&path)?;
    let service = BankService::from_config(config)?;
    assert!(service.list_accounts().is_empty());
    Ok(())
}
