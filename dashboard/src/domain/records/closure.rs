//! Closure records.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::super::ScaledDecimal;

/// A closed placement: a candidate who joined a client.
///
/// Candidate, client, and recruiter are denormalized names rather than record
/// references; closures are entered manually and no link back to the candidate
/// collection is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    /// Unique record identity.
    pub id: Uuid,
    /// Placed candidate's full name.
    pub candidate_name: String,
    /// Client the candidate joined, by name.
    pub client: Option<String>,
    /// Position filled.
    pub position: Option<String>,
    /// Date the candidate started.
    pub date_of_joining: Option<NaiveDate>,
    /// Agreed annual salary.
    pub salary: Option<u32>,
    /// Closing recruiter, by name.
    pub recruiter: Option<String>,
    /// Responsible team lead, by name.
    pub team_lead: Option<String>,
    /// Responsible manager, by name.
    pub manager: Option<String>,
    /// Average revenue per unit, two fractional digits.
    pub arpu: Option<ScaledDecimal>,
    /// Free-text notes.
    pub notes: Option<String>,
}
