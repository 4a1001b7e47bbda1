use std::sync::OnceLock;

use regex::Regex;

fn username_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[a-zA-Z0-9_-]+$").unwrap())
}

fn ktp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{16}$").unwrap())
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() < 3 {
        return Err("Name must have at least 3 characters.".to_string());
    }
    if name.chars().count() > 128 {
        return Err("Name cannot exceed 128 characters.".to_string());
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 {
        return Err("Username must have at least 3 characters.".to_string());
    }
    if username.len() > 32 {
        return Err("Username cannot exceed 32 characters.".to_string());
    }
    if !username_re().is_match(username) {
        return Err(
            "Username can only contain letters, numbers, underscores, and hyphens.".to_string(),
        );
    }
    Ok(())
}

pub fn validate_ktp(no_ktp: &str) -> Result<(), String> {
    if !ktp_re().is_match(no_ktp) {
        return Err("KTP number must be exactly 16 digits.".to_string());
    }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), String> {
    if address.chars().count() < 5 {
        return Err("Address must have at least 5 characters.".to_string());
    }
    if address.chars().count() > 200 {
        return Err("Address cannot exceed 200 characters.".to_string());
    }
    Ok(())
}
