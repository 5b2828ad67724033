//! Contact form validation. The email format check is the only validation in
//! the app; registration accepts whatever the user typed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ContactMessage;

pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const CONTACT_SENT: &str = "Message Sent Successfully!";

/// Why a contact message was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactValidationError {
    InvalidEmail,
}

impl ContactValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ContactValidationError::InvalidEmail => EMAIL_ERROR,
        }
    }
}

/// Characters JavaScript's `\s` matches. Rust's Unicode `\s` differs on
/// U+0085 and U+FEFF, so the class is spelled out.
const JS_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with JavaScript's whitespace set
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", JS_WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Loose email shape check: `local@domain.tld` with no whitespace and a
/// single `@`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a contact message before it is "sent"
pub fn validate_contact(message: &ContactMessage) -> Result<(), ContactValidationError> {
    if is_valid_email(&message.email) {
        Ok(())
    } else {
        Err(ContactValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        assert!(is_valid_email("donor@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x@y..z"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("donor@"));
        assert!(!is_valid_email("donor@example"));
        assert!(!is_valid_email("donor@.com"));
        assert!(!is_valid_email("donor@example."));
        assert!(!is_valid_email("do nor@example.com"));
        assert!(!is_valid_email("donor@@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(" donor@example.com"));
    }

    #[test]
    fn test_whitespace_follows_javascript() {
        // U+FEFF counts as whitespace and U+0085 does not
        assert!(!is_valid_email("donor@example.com\u{feff}"));
        assert!(!is_valid_email("donor\u{a0}@example.com"));
        assert!(!is_valid_email("donor@exa\tmple.com"));
        assert!(is_valid_email("do\u{85}nor@example.com"));
    }

    #[test]
    fn test_validate_contact_only_checks_email() {
        let message = ContactMessage {
            name: String::new(),
            email: "donor@example.com".to_string(),
            message: String::new(),
        };
        assert_eq!(validate_contact(&message), Ok(()));

        let message = ContactMessage {
            email: "nope".to_string(),
            ..message
        };
        let err = validate_contact(&message).unwrap_err();
        assert_eq!(err, ContactValidationError::InvalidEmail);
        assert_eq!(err.message(), EMAIL_ERROR);
    }
}
