//! Action dispatcher: authorization, batch validation, and record creation.
//!
//! `submit` is the only way records enter the store. A submission either
//! appends exactly one record or leaves the store untouched and reports every
//! field problem in one pass.

mod build;
pub mod schema;

mod payload;

use thiserror::Error;
use tracing::{debug, warn};

use self::build::build_record;
use self::payload::{coerce_value, CoercedPayload};
use super::policy::{authorize, Action};
use super::store::RecordStore;
use super::{Record, Role};

pub use self::payload::{FieldValue, Payload};
pub use self::schema::{schema, FieldKind, FieldSpec};

/// One problem with one payload field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field was absent or empty.
    #[error("{field} is required")]
    Missing {
        /// Payload key of the field.
        field: &'static str,
    },
    /// A present field failed coercion to its declared kind.
    #[error("{field}: {reason}")]
    Invalid {
        /// Payload key of the field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl FieldError {
    /// Payload key the problem refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => field,
        }
    }
}

/// Why a submission was rejected.
///
/// Every failure is an explicit result; nothing is appended on any error
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The role may not invoke the action.
    #[error("role {role} may not perform {action}")]
    Unauthorized {
        /// Role that attempted the action.
        role: Role,
        /// Action that was refused.
        action: Action,
    },
    /// One or more payload fields failed validation.
    #[error("payload has {} invalid or missing field(s)", problems.len())]
    ValidationFailed {
        /// Every field problem found, in schema order.
        problems: Vec<FieldError>,
    },
}

/// Validate, authorize, and apply one submitted form payload.
///
/// Empty and whitespace-only values are treated as absent. On success the
/// created record is appended to the store and returned.
///
/// # Errors
///
/// [`DispatchError::Unauthorized`] when the policy refuses the role/action
/// pair; [`DispatchError::ValidationFailed`] with every field problem when
/// the payload does not satisfy the action's schema.
///
/// # Examples
/// ```
/// use dashboard::domain::{dispatch, Action, Payload, RecordStore, Role};
///
/// let mut store = RecordStore::new();
/// let mut payload = Payload::new();
/// payload.insert("clientName".to_owned(), "Acme".to_owned());
///
/// let record = dispatch::submit(Role::Manager, Action::AddClient, &payload, &mut store).unwrap();
/// assert_eq!(store.clients().len(), 1);
/// assert_eq!(store.clients()[0].id, record.id());
/// ```
pub fn submit(
    role: Role,
    action: Action,
    payload: &Payload,
    store: &mut RecordStore,
) -> Result<Record, DispatchError> {
    if !authorize(role, action) {
        warn!(role = %role, action = %action, "refused unauthorized submission");
        return Err(DispatchError::Unauthorized { role, action });
    }

    let mut values = validate(action, payload).map_err(|problems| {
        debug!(action = %action, problems = problems.len(), "payload failed validation");
        DispatchError::ValidationFailed { problems }
    })?;

    let record = build_record(action, &mut values).map_err(|problem| {
        DispatchError::ValidationFailed {
            problems: vec![problem],
        }
    })?;
    store.append(record.clone());
    debug!(action = %action, id = %record.id(), "appended record");
    Ok(record)
}

/// Check the payload against the action's schema, collecting every problem.
fn validate(action: Action, payload: &Payload) -> Result<CoercedPayload, Vec<FieldError>> {
    let mut problems = Vec::new();
    let mut values = CoercedPayload::default();

    for spec in schema(action) {
        let raw = payload
            .get(spec.name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty());
        match raw {
            None => {
                if spec.required {
                    problems.push(FieldError::Missing { field: spec.name });
                }
            }
            Some(value) => match coerce_value(spec.kind, value) {
                Ok(coerced) => values.insert(spec.name, coerced),
                Err(reason) => problems.push(FieldError::Invalid {
                    field: spec.name,
                    reason,
                }),
            },
        }
    }

    if problems.is_empty() {
        Ok(values)
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests;
