use addresscheck::{AddressCheckError, WarningFamily, WarningTable};

#[test]
fn test_lookup_known_codes() {
    assert_eq!(WarningTable::lookup("synm001").unwrap(), "No '@' found");
    assert_eq!(WarningTable::lookup("synm003").unwrap(), "No domain name found");
    assert_eq!(
        WarningTable::lookup("synm012").unwrap(),
        "The top level domain (TLD) can only contain letters and must have a minimum length of two"
    );
    assert_eq!(WarningTable::lookup("extm007").unwrap(), "Dots are not allowd at the end");
    assert_eq!(
        WarningTable::lookup("extm030").unwrap(),
        "The first chracter must be either a letter or a digit"
    );
}

#[test]
fn test_lookup_unknown_code() {
    match WarningTable::lookup("synm999") {
        Err(AddressCheckError::UnknownWarningCode { code }) => assert_eq!(code, "synm999"),
        other => panic!("expected unknown warning code, got {:?}", other),
    }

    assert!(WarningTable::lookup("").is_err());
    assert!(WarningTable::lookup("SYNM001").is_err());
    assert!(WarningTable::lookup(" synm001").is_err());
}

#[test]
fn test_every_code_resolves() {
    assert_eq!(WarningTable::len(), 48);
    for (code, message) in WarningTable::entries() {
        assert!(WarningTable::contains(code));
        assert_eq!(WarningTable::lookup(code).unwrap(), message);
        assert!(!message.is_empty());
        assert!(WarningFamily::of(code).is_some(), "{} has no family", code);
    }
}

#[test]
fn test_code_format() {
    for code in WarningTable::codes() {
        assert_eq!(code.len(), 7);
        assert!(code[4..].chars().all(|c| c.is_ascii_digit()), "{}", code);
    }
}

#[test]
fn test_unknown_code_is_not_retryable() {
    let error = WarningTable::lookup("extm031").unwrap_err();
    assert!(!error.is_retryable());
}
