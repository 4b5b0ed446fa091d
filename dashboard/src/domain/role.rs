//! Actor roles recognised by the dashboard.
//!
//! A role is an attribute of the authenticated actor supplied by the login
//! collaborator, not a stored record. The access policy in
//! [`crate::domain::policy`] is a pure function of this type.

use serde::{Deserialize, Serialize};

/// Role of the actor driving a dashboard session.
///
/// # Examples
/// ```
/// use dashboard::domain::Role;
///
/// let role: Role = "teamlead".parse().unwrap();
/// assert_eq!(role, Role::TeamLead);
/// assert_eq!(role.display_name(), "Team Lead");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Individual contributor; may not create records.
    Recruiter,
    /// Leads a recruiting team.
    TeamLead,
    /// Oversees teams and client relationships.
    Manager,
    /// Full operational access, including closures.
    Admin,
}

impl Role {
    /// Every role, in ascending order of privilege.
    pub const ALL: [Self; 4] = [Self::Recruiter, Self::TeamLead, Self::Manager, Self::Admin];

    /// Returns the wire string used by login payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recruiter => "recruiter",
            Self::TeamLead => "teamlead",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Human-facing portal name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Recruiter => "Recruiter",
            Self::TeamLead => "Team Lead",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown role: {}", self.input)
    }
}

impl std::error::Error for ParseRoleError {}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recruiter" => Ok(Self::Recruiter),
            "teamlead" => Ok(Self::TeamLead),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError {
                input: other.to_owned(),
            }),
        }
    }
}
