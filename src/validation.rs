//! Syntactic checks for registration form input.
//!
//! Everything here is a pure predicate: any string goes in, a verdict comes
//! out. Nothing normalizes or looks anything up.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{DEFAULT_PASSWORD_MIN_LENGTH, EMAIL_PATTERN};
use crate::error::RegError;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).expect("email pattern is valid");
}

/// Returns true when `input` contains `<non-space>@<non-space>.<non-space>`.
///
/// This is intentionally approximate. `"a@b.c"` passes, as does anything with
/// such a run somewhere inside it; `"user@localhost"` does not.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Returns true when `input` has a lowercase letter, an uppercase letter, a
/// digit, and at least six characters.
pub fn is_valid_password(input: &str) -> bool {
    PasswordPolicy::default().check(input)
}

/// Password rule with an adjustable minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Each condition is independent of character order.
    pub fn check(&self, input: &str) -> bool {
        let mut has_lower = false;
        let mut has_upper = false;
        let mut has_digit = false;
        let mut length = 0;

        for c in input.chars() {
            has_lower |= c.is_ascii_lowercase();
            has_upper |= c.is_ascii_uppercase();
            has_digit |= c.is_ascii_digit();
            length += 1;
        }

        has_lower && has_upper && has_digit && length >= self.min_length
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_MIN_LENGTH)
    }
}

/// A named validation rule, selectable by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Email,
    Password,
}

impl Rule {
    pub fn check(&self, input: &str) -> bool {
        match self {
            Rule::Email => is_valid_email(input),
            Rule::Password => is_valid_password(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Email => "email",
            Rule::Password => "password",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Rule::Email),
            "password" => Ok(Rule::Password),
            _ => Err(RegError::UnknownRule(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_at_sign() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a.b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_accepts_simple_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("x@y.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_email_rejects_missing_segments() {
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c") && !is_valid_email("a@b."));
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_email_is_unanchored() {
        // A valid run anywhere in the string is enough.
        assert!(is_valid_email("contact: a@b.c please"));
        assert!(!is_valid_email("a @b.c"));
    }

    #[test]
    fn test_password_examples() {
        assert!(is_valid_password("Abc123"));
        assert!(!is_valid_password("abc123"));
        assert!(!is_valid_password("ABC123"));
        assert!(!is_valid_password("Abcdef"));
    }

    #[test]
    fn test_password_too_short() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("Ab1"));
        assert!(!is_valid_password("Ab1cD"));
    }

    #[test]
    fn test_password_order_does_not_matter() {
        assert!(is_valid_password("123cbA"));
        assert!(is_valid_password("9zzzzZ"));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Five characters, more than six bytes.
        assert!(!is_valid_password("Aé1éé"));
        assert!(is_valid_password("Aé1ééé"));
    }

    #[test]
    fn test_password_newline_is_an_ordinary_character() {
        assert!(is_valid_password("abc\nABC123"));
        assert!(is_valid_password("Ab\n1cd"));
    }

    #[test]
    fn test_custom_policy() {
        let strict = PasswordPolicy::new(10);
        assert!(!strict.check("Abc123"));
        assert!(strict.check("Abc1234567"));
        assert_eq!(PasswordPolicy::default().min_length, 6);
    }

    #[test]
    fn test_rule_parsing() {
        assert_eq!("email".parse::<Rule>().unwrap(), Rule::Email);
        assert_eq!(" Password ".parse::<Rule>().unwrap(), Rule::Password);
        assert!(matches!("phone".parse::<Rule>(), Err(RegError::UnknownRule(r)) if r == "phone"));
        assert!(matches!(" Zip ".parse::<Rule>(), Err(RegError::UnknownRule(r)) if r == "Zip"));
    }

    #[test]
    fn test_rule_check_dispatch() {
        assert!(Rule::Email.check("a@b.c"));
        assert!(!Rule::Email.check("Abc123"));
        assert!(Rule::Password.check("Abc123"));
        assert_eq!(Rule::Password.to_string(), "password");
    }
}
