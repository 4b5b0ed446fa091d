//! Payload coercion into typed field values.
//!
//! Coercion is attempted for every present field before validation fails, so
//! one submission reports every problem at once.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::super::records::CandidateStatus;
use super::super::{Email, ScaledDecimal};
use super::schema::FieldKind;

/// Raw form payload: field name to entered value.
pub type Payload = BTreeMap<String, String>;

/// A payload value coerced to its schema kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Trimmed free text.
    Text(String),
    /// Validated email address.
    Email(Email),
    /// Parsed calendar date.
    Date(NaiveDate),
    /// Parsed non-negative integer.
    Int(u32),
    /// Parsed non-negative decimal.
    Decimal(ScaledDecimal),
    /// Parsed candidate status.
    Status(CandidateStatus),
}

/// Coerce one raw value to the declared kind, or explain why it cannot be.
pub(super) fn coerce_value(kind: FieldKind, raw: &str) -> Result<FieldValue, String> {
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_owned())),
        FieldKind::Email => Email::parse(raw)
            .map(FieldValue::Email)
            .map_err(|err| err.to_string()),
        FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(FieldValue::Date)
            .map_err(|_| "expected an ISO date (YYYY-MM-DD)".to_owned()),
        FieldKind::NonNegativeInt => raw
            .parse::<u32>()
            .map(FieldValue::Int)
            .map_err(|_| "expected a non-negative whole number".to_owned()),
        FieldKind::NonNegativeDecimal { scale } => ScaledDecimal::parse(raw, scale)
            .map(FieldValue::Decimal)
            .map_err(|err| err.to_string()),
        FieldKind::Status => raw
            .parse::<CandidateStatus>()
            .map(FieldValue::Status)
            .map_err(|err| err.to_string()),
    }
}

/// Typed field values for one validated submission.
///
/// Accessors move values out; a record builder takes each field exactly once.
#[derive(Debug, Default)]
pub(super) struct CoercedPayload {
    values: BTreeMap<&'static str, FieldValue>,
}

impl CoercedPayload {
    pub(super) fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.values.insert(field, value);
    }

    /// Text value of a field validated as required.
    pub(super) fn required_text(&mut self, field: &'static str) -> Result<String, super::FieldError> {
        self.text(field)
            .ok_or(super::FieldError::Missing { field })
    }

    /// Email value of a field validated as required.
    pub(super) fn required_email(
        &mut self,
        field: &'static str,
    ) -> Result<Email, super::FieldError> {
        self.email(field)
            .ok_or(super::FieldError::Missing { field })
    }

    pub(super) fn text(&mut self, field: &'static str) -> Option<String> {
        match self.values.remove(field) {
            Some(FieldValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub(super) fn email(&mut self, field: &'static str) -> Option<Email> {
        match self.values.remove(field) {
            Some(FieldValue::Email(value)) => Some(value),
            _ => None,
        }
    }

    pub(super) fn date(&mut self, field: &'static str) -> Option<NaiveDate> {
        match self.values.remove(field) {
            Some(FieldValue::Date(value)) => Some(value),
            _ => None,
        }
    }

    pub(super) fn int(&mut self, field: &'static str) -> Option<u32> {
        match self.values.remove(field) {
            Some(FieldValue::Int(value)) => Some(value),
            _ => None,
        }
    }

    pub(super) fn decimal(&mut self, field: &'static str) -> Option<ScaledDecimal> {
        match self.values.remove(field) {
            Some(FieldValue::Decimal(value)) => Some(value),
            _ => None,
        }
    }

    pub(super) fn status(&mut self, field: &'static str) -> Option<CandidateStatus> {
        match self.values.remove(field) {
            Some(FieldValue::Status(value)) => Some(value),
            _ => None,
        }
    }
}
