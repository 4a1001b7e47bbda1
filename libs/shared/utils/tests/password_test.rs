use shared_utils::password::{hash_password, validate_password, verify_password};

#[test]
fn hash_then_verify_accepts_correct_password() {
    let hash = hash_password("Sup3r-Secret!").unwrap();

    assert!(verify_password("Sup3r-Secret!", &hash).unwrap());
    assert!(!verify_password("wrong-password", &hash).unwrap());
}

#[test]
fn hashes_are_salted() {
    let first = hash_password("Sup3r-Secret!").unwrap();
    let second = hash_password("Sup3r-Secret!").unwrap();

    assert_ne!(first, second);
}

#[test]
fn password_policy() {
    assert!(validate_password("Aa1!aaaa").is_ok());

    // Too short / too long.
    assert!(validate_password("Aa1!").is_err());
    assert!(validate_password(&"Aa1!".repeat(10)).is_err());

    // Missing one character class each.
    assert!(validate_password("Aa!aaaaa").is_err());
    assert!(validate_password("AA1!AAAA").is_err());
    assert!(validate_password("aa1!aaaa").is_err());
    assert!(validate_password("Aa1aaaaa").is_err());
}
