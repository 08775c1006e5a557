//! Domain Value Objects
//!
//! Immutable value types for the starstore domain.

use crate::error::{StoreError, StoreResult};

/// Required card number length
const CARD_NUMBER_LENGTH: usize = 16;

/// Number of trailing digits left visible after redaction
const VISIBLE_DIGITS: usize = 4;

/// Card number value object
///
/// Holds a validated 16-digit card number. The full number is only ever
/// persisted inside a `Purchase`; everything public-facing goes through
/// [`CardNumber::redacted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    /// Create a new card number with validation
    pub fn new(card_number: impl Into<String>) -> StoreResult<Self> {
        let card_number = card_number.into();

        if card_number.len() != CARD_NUMBER_LENGTH {
            return Err(StoreError::CardNumberLength(card_number.len()));
        }

        if !card_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(StoreError::CardNumberNotNumeric);
        }

        Ok(Self(card_number))
    }

    /// Get the full card number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last four digits
    pub fn last_four(&self) -> &str {
        &self.0[self.0.len() - VISIBLE_DIGITS..]
    }

    /// Redacted display form: `"**** **** **** 3456"`
    pub fn redacted(&self) -> String {
        format!("**** **** **** {}", self.last_four())
    }
}
