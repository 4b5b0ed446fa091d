//! Unit tests for the action dispatcher.

use rstest::rstest;

use super::super::records::CandidateStatus;
use super::super::{Record, RecordStore, Role};
use super::*;

fn payload(entries: &[(&str, &str)]) -> Payload {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

fn candidate_payload() -> Payload {
    payload(&[
        ("fullName", "Priya Nair"),
        ("email", "priya.nair@example.com"),
        ("status", "selected"),
        ("client", "TechCorp"),
        ("recruiterReporting", "Sarah Chen"),
        ("dateOfJoining", "2024-11-18"),
        ("salary", "72000"),
        ("arpu", "14.25"),
    ])
}

#[test]
fn valid_candidate_submission_appends_exactly_one_record() {
    let mut store = RecordStore::new();
    let record = submit(
        Role::TeamLead,
        Action::AddCandidate,
        &candidate_payload(),
        &mut store,
    )
    .expect("valid payload should be accepted");

    assert_eq!(store.candidates().len(), 1);
    assert_eq!(store.record_count(), 1);
    let Record::Candidate(candidate) = record else {
        panic!("AddCandidate must yield a candidate record");
    };
    assert_eq!(candidate.full_name, "Priya Nair");
    assert_eq!(candidate.status, CandidateStatus::Selected);
    assert_eq!(candidate.salary, Some(72_000));
    assert_eq!(
        candidate.arpu.map(|arpu| arpu.to_string()),
        Some("14.25".to_owned())
    );
}

#[rstest]
#[case(Role::Recruiter, Action::AddCandidate)]
#[case(Role::Recruiter, Action::AddClosure)]
#[case(Role::TeamLead, Action::AddClient)]
#[case(Role::TeamLead, Action::AddClosure)]
#[case(Role::Manager, Action::AddClosure)]
fn unauthorized_pairs_leave_the_store_unchanged(#[case] role: Role, #[case] action: Action) {
    let mut store = RecordStore::new();
    let err = submit(role, action, &candidate_payload(), &mut store)
        .expect_err("forbidden pair must be refused");

    assert_eq!(err, DispatchError::Unauthorized { role, action });
    assert_eq!(store.record_count(), 0);
}

#[test]
fn authorization_is_checked_before_the_payload_is_read() {
    // A forbidden trigger must be refused even with a garbage payload, and
    // must report Unauthorized rather than validation problems.
    let mut store = RecordStore::new();
    let err = submit(
        Role::Recruiter,
        Action::AddCandidate,
        &payload(&[("email", "not-an-email")]),
        &mut store,
    )
    .expect_err("forbidden pair must be refused");

    assert!(matches!(err, DispatchError::Unauthorized { .. }));
    assert_eq!(store.record_count(), 0);
}

#[test]
fn missing_and_invalid_fields_are_reported_together() {
    let mut store = RecordStore::new();
    let err = submit(
        Role::Admin,
        Action::AddCandidate,
        &payload(&[("email", "not-an-email"), ("salary", "lots")]),
        &mut store,
    )
    .expect_err("bad payload must be refused");

    let DispatchError::ValidationFailed { problems } = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(store.record_count(), 0);
    assert!(problems.contains(&FieldError::Missing { field: "fullName" }));
    assert!(problems
        .iter()
        .any(|problem| matches!(problem, FieldError::Invalid { field: "email", .. })));
    assert!(problems
        .iter()
        .any(|problem| matches!(problem, FieldError::Invalid { field: "salary", .. })));
    assert_eq!(problems.len(), 3);
}

#[test]
fn arpu_beyond_scale_two_is_rejected_with_the_scale_reason() {
    let mut store = RecordStore::new();
    let err = submit(
        Role::Admin,
        Action::AddCandidate,
        &payload(&[
            ("fullName", "Priya Nair"),
            ("email", "priya.nair@example.com"),
            ("arpu", "12.345"),
        ]),
        &mut store,
    )
    .expect_err("over-scale arpu must be refused");

    assert_eq!(
        err,
        DispatchError::ValidationFailed {
            problems: vec![FieldError::Invalid {
                field: "arpu",
                reason: "exceeds scale 2".to_owned(),
            }],
        }
    );
    assert_eq!(store.record_count(), 0);
}

#[rstest]
#[case("dateOfJoining", "18/11/2024")]
#[case("dateOfJoining", "2024-13-01")]
#[case("status", "hired")]
#[case("salary", "-5")]
fn malformed_optional_values_are_invalid(#[case] field: &str, #[case] value: &str) {
    let mut store = RecordStore::new();
    let err = submit(
        Role::Admin,
        Action::AddCandidate,
        &payload(&[
            ("fullName", "Priya Nair"),
            ("email", "priya.nair@example.com"),
            (field, value),
        ]),
        &mut store,
    )
    .expect_err("malformed value must be refused");

    let DispatchError::ValidationFailed { problems } = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].field(), field);
    assert_eq!(store.record_count(), 0);
}

#[test]
fn whitespace_only_optional_fields_are_treated_as_absent() {
    let mut store = RecordStore::new();
    let record = submit(
        Role::Manager,
        Action::AddClient,
        &payload(&[
            ("clientName", "  Acme  "),
            ("spoc", "   "),
            ("numberOfPositions", "3"),
        ]),
        &mut store,
    )
    .expect("blank optionals must not fail validation");

    let Record::Client(client) = record else {
        panic!("AddClient must yield a client record");
    };
    assert_eq!(client.client_name, "Acme");
    assert_eq!(client.spoc, None);
    assert_eq!(client.number_of_positions, Some(3));
}

#[test]
fn whitespace_only_required_field_is_missing() {
    let mut store = RecordStore::new();
    let err = submit(
        Role::Manager,
        Action::AddClient,
        &payload(&[("clientName", "   ")]),
        &mut store,
    )
    .expect_err("blank required field must be refused");

    assert_eq!(
        err,
        DispatchError::ValidationFailed {
            problems: vec![FieldError::Missing {
                field: "clientName"
            }],
        }
    );
}

#[test]
fn omitted_candidate_status_defaults_to_prospect() {
    let mut store = RecordStore::new();
    let record = submit(
        Role::TeamLead,
        Action::AddCandidate,
        &payload(&[("fullName", "Omar Farouk"), ("email", "omar@example.com")]),
        &mut store,
    )
    .expect("minimal payload should be accepted");

    let Record::Candidate(candidate) = record else {
        panic!("AddCandidate must yield a candidate record");
    };
    assert_eq!(candidate.status, CandidateStatus::Prospect);
}

#[test]
fn closure_accepts_denormalized_names_without_a_matching_candidate() {
    let mut store = RecordStore::new();
    let record = submit(
        Role::Admin,
        Action::AddClosure,
        &payload(&[
            ("candidateName", "Unknown Person"),
            ("client", "Global Inc"),
            ("recruiter", "Mike Johnson"),
            ("salary", "64000"),
        ]),
        &mut store,
    )
    .expect("closures are not cross-checked against candidates");

    assert_eq!(store.closures().len(), 1);
    let Record::Closure(closure) = record else {
        panic!("AddClosure must yield a closure record");
    };
    assert_eq!(closure.candidate_name, "Unknown Person");
}

#[test]
fn every_schema_field_is_unique_within_its_action() {
    for action in Action::ALL {
        let fields = schema(action);
        for (index, spec) in fields.iter().enumerate() {
            assert!(
                fields
                    .iter()
                    .skip(index + 1)
                    .all(|other| other.name != spec.name),
                "duplicate field {} in {action} schema",
                spec.name
            );
        }
    }
}
