//! Role access policy for record-creation actions.
//!
//! The mapping from role to actions is total and explicit for all four roles.
//! It decides which action triggers a role sees, and the dispatcher checks it
//! again before any mutation so a UI bug cannot smuggle a forbidden action
//! through.

use serde::{Deserialize, Serialize};

use super::Role;

/// A record-creation action a role may invoke.
///
/// # Examples
/// ```
/// use dashboard::domain::Action;
///
/// let action: Action = "addClosure".parse().unwrap();
/// assert_eq!(action, Action::AddClosure);
/// assert_eq!(action.label(), "Add Closure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Create a candidate record.
    AddCandidate,
    /// Create a recruiter record.
    AddRecruiter,
    /// Create a client record.
    AddClient,
    /// Create a closure record.
    AddClosure,
}

impl Action {
    /// Every action, in trigger display order.
    pub const ALL: [Self; 4] = [
        Self::AddCandidate,
        Self::AddRecruiter,
        Self::AddClient,
        Self::AddClosure,
    ];

    /// Returns the wire string used by form submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddCandidate => "addCandidate",
            Self::AddRecruiter => "addRecruiter",
            Self::AddClient => "addClient",
            Self::AddClosure => "addClosure",
        }
    }

    /// Human-facing trigger label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddCandidate => "Add Candidate",
            Self::AddRecruiter => "Add Recruiter",
            Self::AddClient => "Add Client",
            Self::AddClosure => "Add Closure",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown action: {}", self.input)
    }
}

impl std::error::Error for ParseActionError {}

impl std::str::FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addCandidate" => Ok(Self::AddCandidate),
            "addRecruiter" => Ok(Self::AddRecruiter),
            "addClient" => Ok(Self::AddClient),
            "addClosure" => Ok(Self::AddClosure),
            other => Err(ParseActionError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Actions the given role may invoke, in trigger display order.
///
/// Pure function of the role; there is no per-user override.
///
/// # Examples
/// ```
/// use dashboard::domain::{Role, allowed_actions};
///
/// assert!(allowed_actions(Role::Recruiter).is_empty());
/// assert_eq!(allowed_actions(Role::Admin).len(), 4);
/// ```
pub fn allowed_actions(role: Role) -> &'static [Action] {
    match role {
        Role::Recruiter => &[],
        Role::TeamLead => &[Action::AddCandidate, Action::AddRecruiter],
        Role::Manager => &[Action::AddCandidate, Action::AddRecruiter, Action::AddClient],
        Role::Admin => &[
            Action::AddCandidate,
            Action::AddRecruiter,
            Action::AddClient,
            Action::AddClosure,
        ],
    }
}

/// Whether the role may invoke the action.
pub fn authorize(role: Role, action: Action) -> bool {
    allowed_actions(role).contains(&action)
}
