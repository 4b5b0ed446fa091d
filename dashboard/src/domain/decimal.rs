//! Non-negative fixed-point money and rate values.
//!
//! Salary-adjacent fields (ARPU, experience years) carry a declared number of
//! fractional digits. Storing minor units in an unsigned integer makes
//! negative amounts and precision drift unrepresentable.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A non-negative decimal with a fixed number of fractional digits.
///
/// ## Invariants
/// - Never negative: the amount is held as unsigned minor units.
/// - Never more fractional digits than the declared scale.
///
/// # Examples
/// ```
/// use dashboard::domain::ScaledDecimal;
///
/// let arpu = ScaledDecimal::parse("12.5", 2).unwrap();
/// assert_eq!(arpu.to_string(), "12.50");
/// assert!(ScaledDecimal::parse("12.345", 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaledDecimal {
    minor_units: u64,
    scale: u8,
}

impl ScaledDecimal {
    /// Parse a decimal string at the given scale.
    ///
    /// Input is trimmed first. Fewer fractional digits than the scale are
    /// accepted and padded; more are rejected.
    pub fn parse(value: &str, scale: u8) -> Result<Self, ScaledDecimalValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ScaledDecimalValidationError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(ScaledDecimalValidationError::Negative);
        }
        let (integer, fraction) = match trimmed.split_once('.') {
            Some((integer, fraction)) if !fraction.is_empty() => (integer, fraction),
            Some(_) => return Err(ScaledDecimalValidationError::Malformed),
            None => (trimmed, ""),
        };
        if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
            return Err(ScaledDecimalValidationError::Malformed);
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(ScaledDecimalValidationError::Malformed);
        }
        if fraction.len() > usize::from(scale) {
            return Err(ScaledDecimalValidationError::ExceedsScale { scale });
        }

        let mut minor_units: u64 = integer
            .parse()
            .map_err(|_| ScaledDecimalValidationError::OutOfRange)?;
        for _ in 0..scale {
            minor_units = minor_units
                .checked_mul(10)
                .ok_or(ScaledDecimalValidationError::OutOfRange)?;
        }
        if !fraction.is_empty() {
            let fraction_units: u64 = fraction
                .parse()
                .map_err(|_| ScaledDecimalValidationError::OutOfRange)?;
            let padding = usize::from(scale) - fraction.len();
            let mut scaled_fraction = fraction_units;
            for _ in 0..padding {
                scaled_fraction = scaled_fraction
                    .checked_mul(10)
                    .ok_or(ScaledDecimalValidationError::OutOfRange)?;
            }
            minor_units = minor_units
                .checked_add(scaled_fraction)
                .ok_or(ScaledDecimalValidationError::OutOfRange)?;
        }
        Ok(Self { minor_units, scale })
    }

    /// The amount expressed in minor units (e.g. 1250 for `12.50` at scale 2).
    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// The declared number of fractional digits.
    pub fn scale(&self) -> u8 {
        self.scale
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.minor_units);
        }
        let base = 10u64.pow(u32::from(self.scale));
        let whole = self.minor_units / base;
        let fraction = self.minor_units % base;
        write!(
            f,
            "{whole}.{fraction:0width$}",
            width = usize::from(self.scale)
        )
    }
}

impl Serialize for ScaledDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Validation errors returned when constructing a [`ScaledDecimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScaledDecimalValidationError {
    /// Input was empty after trimming.
    #[error("value must not be empty")]
    Empty,
    /// Input carried a leading minus sign.
    #[error("value must not be negative")]
    Negative,
    /// Input was not a plain decimal number.
    #[error("value must be a decimal number")]
    Malformed,
    /// More fractional digits than the declared scale.
    #[error("exceeds scale {scale}")]
    ExceedsScale {
        /// The scale the value was parsed against.
        scale: u8,
    },
    /// Amount does not fit the minor-unit representation.
    #[error("value is too large")]
    OutOfRange,
}
