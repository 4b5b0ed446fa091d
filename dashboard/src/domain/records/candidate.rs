//! Candidate records and pipeline status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::{Email, ScaledDecimal};

/// Stage of a candidate in the recruitment pipeline.
///
/// # Examples
/// ```
/// use dashboard::domain::CandidateStatus;
///
/// let status: CandidateStatus = "interviewing".parse().unwrap();
/// assert_eq!(status, CandidateStatus::Interviewing);
/// assert!(!status.is_settled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    /// Sourced but not yet in process.
    #[default]
    Prospect,
    /// Actively interviewing with a client.
    Interviewing,
    /// Offer made and accepted, joining date pending.
    Selected,
    /// Started at the client.
    Joined,
    /// Dropped out of the pipeline.
    Rejected,
}

impl CandidateStatus {
    /// Returns the wire string used by form payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Interviewing => "interviewing",
            Self::Selected => "selected",
            Self::Joined => "joined",
            Self::Rejected => "rejected",
        }
    }

    /// Whether the pipeline has concluded for this candidate.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Joined | Self::Rejected)
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown candidate status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCandidateStatusError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseCandidateStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown candidate status: {}", self.input)
    }
}

impl std::error::Error for ParseCandidateStatusError {}

impl std::str::FromStr for CandidateStatus {
    type Err = ParseCandidateStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prospect" => Ok(Self::Prospect),
            "interviewing" => Ok(Self::Interviewing),
            "selected" => Ok(Self::Selected),
            "joined" => Ok(Self::Joined),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseCandidateStatusError {
                input: other.to_owned(),
            }),
        }
    }
}

/// A candidate progressing through the recruitment pipeline.
///
/// Immutable once created; reporting lines and the client are denormalized
/// names, matching the manual data entry the dashboard serves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique record identity.
    pub id: Uuid,
    /// Candidate's full name.
    pub full_name: String,
    /// Contact email address.
    pub email: Email,
    /// Phone number as entered.
    pub contact_number: Option<String>,
    /// Position the candidate is considered for.
    pub position: Option<String>,
    /// Candidate's location.
    pub location: Option<String>,
    /// Client the candidate is pipelined for, by name.
    pub client: Option<String>,
    /// Current pipeline stage.
    pub status: CandidateStatus,
    /// Date the candidate joined, when known.
    pub date_of_joining: Option<NaiveDate>,
    /// Agreed annual salary.
    pub salary: Option<u32>,
    /// Recruiter this candidate reports to, by name.
    pub recruiter_reporting: Option<String>,
    /// Team lead this candidate reports to, by name.
    pub team_lead_reporting: Option<String>,
    /// Responsible manager, by name.
    pub manager: Option<String>,
    /// Average revenue per unit, two fractional digits.
    pub arpu: Option<ScaledDecimal>,
    /// Free-text notes.
    pub additional_info: Option<String>,
    /// Department bucket used by team analytics; set when seeding, not by forms.
    pub department: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CandidateStatus::Prospect, "prospect", false)]
    #[case(CandidateStatus::Interviewing, "interviewing", false)]
    #[case(CandidateStatus::Selected, "selected", false)]
    #[case(CandidateStatus::Joined, "joined", true)]
    #[case(CandidateStatus::Rejected, "rejected", true)]
    fn wire_names_round_trip(
        #[case] status: CandidateStatus,
        #[case] wire: &str,
        #[case] settled: bool,
    ) {
        assert_eq!(status.as_str(), wire);
        assert_eq!(
            wire.parse::<CandidateStatus>().expect("wire name parses"),
            status
        );
        assert_eq!(status.is_settled(), settled);
    }

    #[rstest]
    #[case("")]
    #[case("Joined")]
    #[case("hired")]
    fn unknown_statuses_are_rejected(#[case] input: &str) {
        let err = input
            .parse::<CandidateStatus>()
            .expect_err("unknown statuses must fail");
        assert_eq!(err.input, input);
    }
}
