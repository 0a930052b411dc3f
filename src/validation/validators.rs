//! Standalone format validators

use lazy_static::lazy_static;
use regex::Regex;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
    // Optional leading +, then digits, whitespace, parentheses and dashes
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9\s()-]+$").expect("phone pattern compiles");
}

/// Check that `email` looks like `local@domain.tld`
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// Check that `phone` has 7-15 digits and only phone punctuation
pub fn validate_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) && PHONE_RE.is_match(phone)
}
