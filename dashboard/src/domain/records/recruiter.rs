//! Recruiter records.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::super::{Email, ScaledDecimal};

/// A recruiter on the operations team.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    /// Unique record identity.
    pub id: Uuid,
    /// Recruiter's full name.
    pub full_name: String,
    /// Contact email address.
    pub email: Email,
    /// Phone number as entered.
    pub contact_number: Option<String>,
    /// Free-text sub-role, e.g. "Senior Recruiter".
    pub role: Option<String>,
    /// Team the recruiter belongs to.
    pub team: Option<String>,
    /// Date the recruiter joined the team.
    pub joining_date: Option<NaiveDate>,
    /// Years of experience, one fractional digit.
    pub experience_years: Option<ScaledDecimal>,
    /// Recruiter's location.
    pub location: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}
