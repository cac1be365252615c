//! Postal code (CEP) value object
//!
//! A CEP is accepted in either `01310100` or `01310-100` form. Hyphens are
//! stripped first; what remains must be exactly eight ASCII digits. No other
//! leniency is applied: surrounding whitespace, letters and other lengths are
//! rejected.
//!
//! # Examples
//!
//! ```
//! use domain::PostalCode;
//!
//! let cep = PostalCode::parse("01310-100").unwrap();
//! assert_eq!(cep.as_str(), "01310100");
//!
//! assert!(PostalCode::parse("0131010").is_err());
//! assert!(PostalCode::parse("abcdefgh").is_err());
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::DomainError;

/// Number of digits in a normalized postal code
const POSTAL_CODE_LEN: usize = 8;

/// Strip every hyphen from a raw postal code
pub fn normalize_postal_code(raw: &str) -> String {
    raw.replace('-', "")
}

/// Check whether `raw` is a valid postal code
///
/// True iff, after removing hyphens, the input consists of exactly eight
/// ASCII decimal digits.
///
/// # Examples
///
/// ```
/// use domain::is_valid_postal_code;
///
/// assert!(is_valid_postal_code("01310100"));
/// assert!(is_valid_postal_code("01310-100"));
/// assert!(!is_valid_postal_code(" 01310100"));
/// ```
pub fn is_valid_postal_code(raw: &str) -> bool {
    let mut digits = 0usize;
    for c in raw.chars().filter(|c| *c != '-') {
        if !c.is_ascii_digit() {
            return false;
        }
        digits += 1;
    }
    digits == POSTAL_CODE_LEN
}

/// A validated, normalized postal code (eight ASCII digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Normalize and validate a raw postal code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` carrying the raw input when
    /// validation fails.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !is_valid_postal_code(raw) {
            return Err(DomainError::InvalidPostalCode(raw.to_string()));
        }
        Ok(Self(normalize_postal_code(raw)))
    }

    /// Get the normalized digits
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_digits() {
        assert!(is_valid_postal_code("01310100"));
        assert!(is_valid_postal_code("00000000"));
    }

    #[test]
    fn accepts_hyphenated_form() {
        assert!(is_valid_postal_code("01310-100"));
    }

    #[test]
    fn hyphens_anywhere_are_ignored() {
        assert!(is_valid_postal_code("-0131-0100-"));
        assert!(is_valid_postal_code("0-1-3-1-0-1-0-0"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_postal_code("0131010"));
        assert!(!is_valid_postal_code("013101000"));
        assert!(!is_valid_postal_code("123"));
        assert!(!is_valid_postal_code(""));
        assert!(!is_valid_postal_code("--------"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!is_valid_postal_code("abcdefgh"));
        assert!(!is_valid_postal_code("0131010a"));
        assert!(!is_valid_postal_code("01310.100"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_postal_code(" 01310100"));
        assert!(!is_valid_postal_code("01310100 "));
        assert!(!is_valid_postal_code("01310 100"));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_valid_postal_code("٠١٣١٠١٠٠"));
    }

    #[test]
    fn parse_normalizes() {
        let cep = PostalCode::parse("01310-100").unwrap();
        assert_eq!(cep.as_str(), "01310100");
        assert_eq!(cep.to_string(), "01310100");
    }

    #[test]
    fn parse_reports_raw_input() {
        let err = PostalCode::parse("123").unwrap_err();
        assert_eq!(err, DomainError::InvalidPostalCode("123".to_string()));
    }

    #[test]
    fn serializes_as_plain_string() {
        let cep = PostalCode::parse("01310100").unwrap();
        assert_eq!(serde_json::to_string(&cep).unwrap(), "\"01310100\"");
    }
}
