//! Structurally validated email addresses.
//!
//! The check is deliberately shallow: one `@`, a non-empty local part, and a
//! dotted domain. Deliverability is the mail system's problem, not the
//! dashboard's.

use serde::Serialize;
use thiserror::Error;

/// A syntactically plausible email address.
///
/// ## Invariants
/// - Trimmed, non-empty, and free of whitespace.
/// - Exactly one `@` separating a non-empty local part from a domain that
///   contains at least one interior dot.
///
/// # Examples
/// ```
/// use dashboard::domain::Email;
///
/// let email = Email::parse("sarah.chen@example.com").unwrap();
/// assert_eq!(email.as_str(), "sarah.chen@example.com");
/// assert!(Email::parse("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address from raw input.
    pub fn parse(value: &str) -> Result<Self, EmailValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(EmailValidationError::ContainsWhitespace);
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(EmailValidationError::MissingAtSign);
        };
        if local.is_empty() {
            return Err(EmailValidationError::EmptyLocalPart);
        }
        if domain.contains('@') {
            return Err(EmailValidationError::MultipleAtSigns);
        }
        if !has_dotted_domain(domain) {
            return Err(EmailValidationError::InvalidDomain);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn has_dotted_domain(domain: &str) -> bool {
    let mut labels = domain.split('.');
    let non_empty = labels.clone().count() >= 2;
    non_empty && labels.all(|label| !label.is_empty())
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing an [`Email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailValidationError {
    /// Input was empty after trimming.
    #[error("email must not be empty")]
    Empty,
    /// Input contains whitespace.
    #[error("email must not contain whitespace")]
    ContainsWhitespace,
    /// No `@` separator present.
    #[error("email is missing an @ sign")]
    MissingAtSign,
    /// More than one `@` separator present.
    #[error("email must contain exactly one @ sign")]
    MultipleAtSigns,
    /// Nothing before the `@` separator.
    #[error("email is missing a local part")]
    EmptyLocalPart,
    /// Domain is empty, undotted, or has empty labels.
    #[error("email domain must contain a dot")]
    InvalidDomain,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mike@example.com")]
    #[case("  lisa.wong@corp.example.org  ")]
    #[case("a@b.co")]
    fn accepts_plausible_addresses(#[case] input: &str) {
        let email = Email::parse(input).expect("valid address should parse");
        assert_eq!(email.as_str(), input.trim());
    }

    #[rstest]
    #[case("", EmailValidationError::Empty)]
    #[case("   ", EmailValidationError::Empty)]
    #[case("not-an-email", EmailValidationError::MissingAtSign)]
    #[case("a b@example.com", EmailValidationError::ContainsWhitespace)]
    #[case("@example.com", EmailValidationError::EmptyLocalPart)]
    #[case("a@b@example.com", EmailValidationError::MultipleAtSigns)]
    #[case("user@localhost", EmailValidationError::InvalidDomain)]
    #[case("user@.com", EmailValidationError::InvalidDomain)]
    #[case("user@domain.", EmailValidationError::InvalidDomain)]
    fn rejects_malformed_addresses(#[case] input: &str, #[case] expected: EmailValidationError) {
        let err = Email::parse(input).expect_err("malformed address must fail");
        assert_eq!(err, expected);
    }
}
