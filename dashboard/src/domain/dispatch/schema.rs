//! Per-action payload field schemas.
//!
//! One schema per action; the mapping is a closed exhaustive match, so an
//! unknown action is unrepresentable. Payload keys are the camelCase names
//! the form layer submits.

use super::super::policy::Action;

/// Primitive kind a payload field is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, kept as entered (trimmed).
    Text,
    /// Structurally validated email address.
    Email,
    /// ISO `YYYY-MM-DD` calendar date.
    Date,
    /// Non-negative whole number.
    NonNegativeInt,
    /// Non-negative decimal with at most `scale` fractional digits.
    NonNegativeDecimal {
        /// Maximum fractional digits accepted.
        scale: u8,
    },
    /// Candidate pipeline status name.
    Status,
}

/// One field of an action's payload schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key the field is read from.
    pub name: &'static str,
    /// Kind the raw value is coerced to.
    pub kind: FieldKind,
    /// Whether an absent or empty value fails validation.
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

const ADD_CANDIDATE: &[FieldSpec] = &[
    FieldSpec::required("fullName", FieldKind::Text),
    FieldSpec::required("email", FieldKind::Email),
    FieldSpec::optional("contactNumber", FieldKind::Text),
    FieldSpec::optional("position", FieldKind::Text),
    FieldSpec::optional("location", FieldKind::Text),
    FieldSpec::optional("client", FieldKind::Text),
    FieldSpec::optional("status", FieldKind::Status),
    FieldSpec::optional("dateOfJoining", FieldKind::Date),
    FieldSpec::optional("salary", FieldKind::NonNegativeInt),
    FieldSpec::optional("recruiterReporting", FieldKind::Text),
    FieldSpec::optional("teamLeadReporting", FieldKind::Text),
    FieldSpec::optional("manager", FieldKind::Text),
    FieldSpec::optional("arpu", FieldKind::NonNegativeDecimal { scale: 2 }),
    FieldSpec::optional("additionalInfo", FieldKind::Text),
];

const ADD_RECRUITER: &[FieldSpec] = &[
    FieldSpec::required("fullName", FieldKind::Text),
    FieldSpec::required("email", FieldKind::Email),
    FieldSpec::optional("contactNumber", FieldKind::Text),
    FieldSpec::optional("role", FieldKind::Text),
    FieldSpec::optional("team", FieldKind::Text),
    FieldSpec::optional("joiningDate", FieldKind::Date),
    FieldSpec::optional("experienceYears", FieldKind::NonNegativeDecimal { scale: 1 }),
    FieldSpec::optional("location", FieldKind::Text),
    FieldSpec::optional("notes", FieldKind::Text),
];

const ADD_CLIENT: &[FieldSpec] = &[
    FieldSpec::required("clientName", FieldKind::Text),
    FieldSpec::optional("spoc", FieldKind::Text),
    FieldSpec::optional("contactEmail", FieldKind::Email),
    FieldSpec::optional("arpu", FieldKind::NonNegativeDecimal { scale: 2 }),
    FieldSpec::optional("position", FieldKind::Text),
    FieldSpec::optional("numberOfPositions", FieldKind::NonNegativeInt),
    FieldSpec::optional("additionalInformation", FieldKind::Text),
];

const ADD_CLOSURE: &[FieldSpec] = &[
    FieldSpec::required("candidateName", FieldKind::Text),
    FieldSpec::optional("client", FieldKind::Text),
    FieldSpec::optional("position", FieldKind::Text),
    FieldSpec::optional("dateOfJoining", FieldKind::Date),
    FieldSpec::optional("salary", FieldKind::NonNegativeInt),
    FieldSpec::optional("recruiter", FieldKind::Text),
    FieldSpec::optional("teamLead", FieldKind::Text),
    FieldSpec::optional("manager", FieldKind::Text),
    FieldSpec::optional("arpu", FieldKind::NonNegativeDecimal { scale: 2 }),
    FieldSpec::optional("notes", FieldKind::Text),
];

/// Field schema for the given action.
///
/// # Examples
/// ```
/// use dashboard::domain::{Action, dispatch::schema};
///
/// let fields = schema(Action::AddClient);
/// assert_eq!(fields[0].name, "clientName");
/// assert!(fields[0].required);
/// ```
pub fn schema(action: Action) -> &'static [FieldSpec] {
    match action {
        Action::AddCandidate => ADD_CANDIDATE,
        Action::AddRecruiter => ADD_RECRUITER,
        Action::AddClient => ADD_CLIENT,
        Action::AddClosure => ADD_CLOSURE,
    }
}
