mod common;

use common::test_service;
use teller::application::AppError;

const ACCOUNT: &str = "12345678";

#[test]
fn test_deposit_from_text() {
    let mut service = test_service();

    let receipt = service.deposit(ACCOUNT, "100.00").unwrap();
    assert_eq!(receipt.amount, 10000);
    assert_eq!(receipt.balance, 10000);
    assert_eq!(service.balance_of(ACCOUNT).unwrap(), 10000);
}

#[test]
fn test_withdraw_from_text() {
    let mut service = test_service();

    service.deposit(ACCOUNT, "100").unwrap();
    let receipt = service.withdraw(ACCOUNT, "40.50").unwrap();
    assert_eq!(receipt.amount, 4050);
    assert_eq!(receipt.balance, 5950);
}

#[test]
fn test_unparsable_amount_is_invalid() {
    let mut service = test_service();
    service.deposit(ACCOUNT, "100").unwrap();

    for bad in ["abc", "12.34.56", "1.999", "", "--5", "1.-5", "9223372036854775807"] {
        let err = service.deposit(ACCOUNT, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)), "deposit {bad:?}");
        let err = service.withdraw(ACCOUNT, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)), "withdraw {bad:?}");
    }

    // Nothing changed
    assert_eq!(service.balance_of(ACCOUNT).unwrap(), 10000);
}

#[test]
fn test_non_positive_amount_is_invalid() {
    let mut service = test_service();
    service.deposit(ACCOUNT, "100").unwrap();

    for bad in ["0", "-5", "-0.01"] {
        let err = service.deposit(ACCOUNT, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)), "deposit {bad:?}");
        let err = service.withdraw(ACCOUNT, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)), "withdraw {bad:?}");
    }

    assert_eq!(service.balance_of(ACCOUNT).unwrap(), 10000);
    assert_eq!(service.history_of(ACCOUNT).unwrap().len(), 2);
}

#[test]
fn test_overdraw_reports_context() {
    let mut service = test_service();
    service.deposit(ACCOUNT, "100").unwrap();

    let err = service.withdraw(ACCOUNT, "150").unwrap_err();
    match err {
        AppError::InsufficientFunds {
            account,
            balance,
            requested,
        } => {
            assert_eq!(account, ACCOUNT);
            assert_eq!(balance, 10000);
            assert_eq!(requested, 15000);
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }
    assert_eq!(service.balance_of(ACCOUNT).unwrap(), 10000);
}

#[test]
fn test_deposit_withdraw_to_unknown_account() {
    let mut service = test_service();

    let err = service.deposit("00000000", "50").unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound(_)));
    let err = service.withdraw("00000000", "50").unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound(_)));
}

#[test]
fn test_history_grows_one_entry_per_mutation() {
    let mut service = test_service();

    assert_eq!(service.history_of(ACCOUNT).unwrap().len(), 1);
    service.deposit(ACCOUNT, "100").unwrap();
    assert_eq!(service.history_of(ACCOUNT).unwrap().len(), 2);
    service.withdraw(ACCOUNT, "100").unwrap();

    let history = service.history_of(ACCOUNT).unwrap();
    assert_eq!(history.len(), 3);
    assert!(history[0].contains("created"));
    assert_eq!(history[1], "Deposited 100.00");
    assert_eq!(history[2], "Withdrew 100.00");
}

#[test]
fn test_full_session_scenario() {
    // create -> deposit 100 -> bad deposit -> overdraw -> drain to zero
    let mut service = test_service();
    service.create_account("A1", None).unwrap();

    service.deposit("A1", "100").unwrap();
    assert_eq!(service.balance_of("A1").unwrap(), 10000);
    assert_eq!(service.history_of("A1").unwrap().len(), 2);

    assert!(service.deposit("A1", "-5").is_err());
    assert_eq!(service.balance_of("A1").unwrap(), 10000);

    assert!(service.withdraw("A1", "150").is_err());
    assert_eq!(service.balance_of("A1").unwrap(), 10000);

    service.withdraw("A1", "100").unwrap();
    assert_eq!(service.balance_of("A1").unwrap(), 0);
    assert_eq!(service.history_of("A1").unwrap().len(), 3);
}

#[test]
fn test_accounts_are_isolated() {
    let mut service = test_service();

    service.deposit("12345678", "100").unwrap();
    assert_eq!(service.balance_of("87654321").unwrap(), 0);
    assert_eq!(service.history_of("87654321").unwrap().len(), 1);
}
