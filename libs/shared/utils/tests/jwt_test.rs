use shared_utils::jwt::{issue_token, validate_token, ACCESS_TOKEN_USE, REFRESH_TOKEN_USE};

const SECRET: &str = "test-jwt-secret";

#[test]
fn issued_access_token_round_trips() {
    let token = issue_token(42, ACCESS_TOKEN_USE, 3600, SECRET).unwrap();
    let claims = validate_token(&token, SECRET).unwrap();

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.token_use, ACCESS_TOKEN_USE);
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn refresh_token_carries_its_use() {
    let token = issue_token(7, REFRESH_TOKEN_USE, 2_592_000, SECRET).unwrap();
    let claims = validate_token(&token, SECRET).unwrap();

    assert_eq!(claims.token_use, REFRESH_TOKEN_USE);
}

#[test]
fn wrong_secret_is_rejected() {
    let token = issue_token(1, ACCESS_TOKEN_USE, 3600, SECRET).unwrap();
    let err = validate_token(&token, "another-secret").unwrap_err();

    assert_eq!(err, "Invalid token signature");
}

#[test]
fn tampered_claims_are_rejected() {
    let token = issue_token(1, ACCESS_TOKEN_USE, 3600, SECRET).unwrap();
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    // Swap the claims segment for one signed under a different identity.
    let other = issue_token(2, ACCESS_TOKEN_USE, 3600, SECRET).unwrap();
    parts[1] = other.split('.').nth(1).unwrap().to_string();
    let forged = parts.join(".");

    assert!(validate_token(&forged, SECRET).is_err());
}

#[test]
fn garbage_token_is_rejected() {
    assert!(validate_token("not-a-token", SECRET).is_err());
    assert!(validate_token("a.b.c", SECRET).is_err());
}

#[test]
fn expired_token_is_rejected() {
    let token = issue_token(1, ACCESS_TOKEN_USE, 1, SECRET).unwrap();
    std::thread::sleep(std::time::Duration::from_secs(2));
    let err = validate_token(&token, SECRET).unwrap_err();

    assert_eq!(err, "Token expired");
}

#[test]
fn empty_secret_refuses_to_sign() {
    assert!(issue_token(1, ACCESS_TOKEN_USE, 3600, "").is_err());
    assert!(validate_token("a.b.c", "").is_err());
}
