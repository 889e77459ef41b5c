//! Account number value object
//!
//! This module provides the validated identifier type for bank accounts.
//! The field is private to force validation through the public API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for account numbers
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AccountNoError {
    #[error("account number is missing")]
    Missing,

    #[error("account number text is empty")]
    Empty,

    #[error("account number must be decimal digits: got '{got}'")]
    NotNumeric { got: String },

    #[error("account number '{got}' exceeds the 64-bit range")]
    OutOfRange { got: String },

    #[error("account number must not be negative: got {value}")]
    Negative { value: i64 },
}

// ============================================================================
// AccountNo - Validated Account Number (Private Field)
// ============================================================================

/// Validated account number (guaranteed non-negative, canonical decimal form)
///
/// The field is private to force validation through [`AccountNo::from_number`]
/// or [`AccountNo::from_text`]. Once constructed, the stored value never
/// changes and always renders as plain decimal digits: no sign, no grouping
/// separators, no leading zeros (zero itself renders as `"0"`).
///
/// Equality, hashing, and ordering follow the stored value, so the type is
/// directly usable as a `HashMap` key or inside ordered sets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountNo(i64);

impl AccountNo {
    /// Create an account number from a numeric value.
    ///
    /// `None` models an absent input (e.g. a nullable column or an omitted
    /// request field) and is rejected like any other invalid input.
    ///
    /// # Validation Rules
    /// - Input must be present
    /// - Value must be non-negative (`0` and `i64::MAX` are both valid)
    ///
    /// # Errors
    /// Returns `AccountNoError` if validation fails
    ///
    /// # Examples
    /// ```
    /// use bank_domain::AccountNo;
    ///
    /// let no = AccountNo::from_number(Some(42)).unwrap();
    /// assert_eq!(no.as_i64(), 42);
    ///
    /// assert!(AccountNo::from_number(None).is_err());
    /// assert!(AccountNo::from_number(Some(-1)).is_err());
    /// ```
    pub fn from_number(value: Option<i64>) -> Result<Self, AccountNoError> {
        let value = value.ok_or(AccountNoError::Missing)?;
        if value < 0 {
            return Err(AccountNoError::Negative { value });
        }
        Ok(Self(value))
    }

    /// Create an account number from its textual form.
    ///
    /// Accepts a sequence of ASCII decimal digits. Leading zeros are allowed
    /// on input (`"007"` parses to 7) and never reproduced on output. Signs,
    /// whitespace, grouping separators, and non-ASCII digit forms all fail.
    ///
    /// # Validation Rules
    /// - Input must be present and non-empty
    /// - Every character must be an ASCII digit (`0-9`)
    /// - The value must fit in 64 bits
    ///
    /// # Errors
    /// Returns `AccountNoError` if validation fails
    ///
    /// # Examples
    /// ```
    /// use bank_domain::AccountNo;
    ///
    /// let no = AccountNo::from_text(Some("4711")).unwrap();
    /// assert_eq!(no.as_i64(), 4711);
    /// assert_eq!(no.to_string(), "4711");
    ///
    /// assert!(AccountNo::from_text(Some("")).is_err());
    /// assert!(AccountNo::from_text(Some("A")).is_err());
    /// assert!(AccountNo::from_text(Some(".")).is_err());
    /// ```
    pub fn from_text(text: Option<&str>) -> Result<Self, AccountNoError> {
        let text = text.ok_or(AccountNoError::Missing)?;
        if text.is_empty() {
            return Err(AccountNoError::Empty);
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountNoError::NotNumeric {
                got: text.to_string(),
            });
        }
        // Digits only at this point, so parsing can only fail on overflow.
        let value: i64 = text.parse().map_err(|_| AccountNoError::OutOfRange {
            got: text.to_string(),
        })?;
        Ok(Self(value))
    }

    /// Get the stored value (read-only)
    #[inline(always)]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Canonical decimal rendering: digits only, independent of any process or
/// thread locale configuration.
impl fmt::Display for AccountNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNo {
    type Err = AccountNoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(Some(s))
    }
}

impl TryFrom<i64> for AccountNo {
    type Error = AccountNoError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_number(Some(value))
    }
}

impl TryFrom<String> for AccountNo {
    type Error = AccountNoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_text(Some(&value))
    }
}

impl From<AccountNo> for i64 {
    fn from(no: AccountNo) -> Self {
        no.0
    }
}

// ============================================================================
// Tests
// ============================================================================
