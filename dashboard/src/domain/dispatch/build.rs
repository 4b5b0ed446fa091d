//! Record builders for validated submissions.
//!
//! Each builder consumes the coerced payload for its action and synthesises a
//! record with a fresh identity. Required fields were checked during
//! validation; the accessors still surface a `Missing` error rather than
//! defaulting silently.

use uuid::Uuid;

use super::super::policy::Action;
use super::super::records::{Candidate, CandidateStatus, Client, Closure, Record, Recruiter};
use super::payload::CoercedPayload;
use super::FieldError;

pub(super) fn build_record(
    action: Action,
    values: &mut CoercedPayload,
) -> Result<Record, FieldError> {
    match action {
        Action::AddCandidate => build_candidate(values).map(Record::Candidate),
        Action::AddRecruiter => build_recruiter(values).map(Record::Recruiter),
        Action::AddClient => build_client(values).map(Record::Client),
        Action::AddClosure => build_closure(values).map(Record::Closure),
    }
}

fn build_candidate(values: &mut CoercedPayload) -> Result<Candidate, FieldError> {
    Ok(Candidate {
        id: Uuid::new_v4(),
        full_name: values.required_text("fullName")?,
        email: values.required_email("email")?,
        contact_number: values.text("contactNumber"),
        position: values.text("position"),
        location: values.text("location"),
        client: values.text("client"),
        // New entries start at the top of the pipeline unless stated.
        status: values.status("status").unwrap_or(CandidateStatus::Prospect),
        date_of_joining: values.date("dateOfJoining"),
        salary: values.int("salary"),
        recruiter_reporting: values.text("recruiterReporting"),
        team_lead_reporting: values.text("teamLeadReporting"),
        manager: values.text("manager"),
        arpu: values.decimal("arpu"),
        additional_info: values.text("additionalInfo"),
        department: None,
    })
}

fn build_recruiter(values: &mut CoercedPayload) -> Result<Recruiter, FieldError> {
    Ok(Recruiter {
        id: Uuid::new_v4(),
        full_name: values.required_text("fullName")?,
        email: values.required_email("email")?,
        contact_number: values.text("contactNumber"),
        role: values.text("role"),
        team: values.text("team"),
        joining_date: values.date("joiningDate"),
        experience_years: values.decimal("experienceYears"),
        location: values.text("location"),
        notes: values.text("notes"),
    })
}

fn build_client(values: &mut CoercedPayload) -> Result<Client, FieldError> {
    Ok(Client {
        id: Uuid::new_v4(),
        client_name: values.required_text("clientName")?,
        spoc: values.text("spoc"),
        contact_email: values.email("contactEmail"),
        arpu: values.decimal("arpu"),
        position: values.text("position"),
        number_of_positions: values.int("numberOfPositions"),
        additional_information: values.text("additionalInformation"),
    })
}

fn build_closure(values: &mut CoercedPayload) -> Result<Closure, FieldError> {
    Ok(Closure {
        id: Uuid::new_v4(),
        candidate_name: values.required_text("candidateName")?,
        client: values.text("client"),
        position: values.text("position"),
        date_of_joining: values.date("dateOfJoining"),
        salary: values.int("salary"),
        recruiter: values.text("recruiter"),
        team_lead: values.text("teamLead"),
        manager: values.text("manager"),
        arpu: values.decimal("arpu"),
        notes: values.text("notes"),
    })
}
