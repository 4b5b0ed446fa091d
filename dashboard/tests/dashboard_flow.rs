//! End-to-end dashboard flows over a seeded session.

use chrono::Month;
use rstest::rstest;

use dashboard::domain::{
    allowed_actions, Action, DashboardSession, DispatchError, FieldError, FilterState, KpiKind,
    Payload, PeriodFilter, Role, ScopeFilter, TableView,
};
use dashboard::example_data;

fn payload(entries: &[(&str, &str)]) -> Payload {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

fn seeded_session(role: Role) -> DashboardSession {
    DashboardSession::with_store(role, example_data::seed().expect("seed fixtures must be valid"))
}

#[rstest]
#[case(Role::Recruiter, &[])]
#[case(Role::TeamLead, &[Action::AddCandidate, Action::AddRecruiter])]
#[case(Role::Manager, &[Action::AddCandidate, Action::AddRecruiter, Action::AddClient])]
#[case(
    Role::Admin,
    &[Action::AddCandidate, Action::AddRecruiter, Action::AddClient, Action::AddClosure]
)]
fn each_role_sees_exactly_its_action_triggers(#[case] role: Role, #[case] expected: &[Action]) {
    assert_eq!(allowed_actions(role), expected);
    assert_eq!(DashboardSession::new(role).allowed_actions(), expected);
}

#[test]
fn a_recruiter_cannot_add_a_candidate_even_with_a_valid_payload() {
    let mut session = seeded_session(Role::Recruiter);
    let before = session.store().clone();

    let err = session
        .submit(
            Action::AddCandidate,
            &payload(&[("fullName", "Nadia Haddad"), ("email", "nadia@example.com")]),
        )
        .expect_err("the policy must refuse the submission");

    assert_eq!(
        err,
        DispatchError::Unauthorized {
            role: Role::Recruiter,
            action: Action::AddCandidate,
        }
    );
    assert_eq!(session.store(), &before, "no partial effect on failure");
}

#[test]
fn a_valid_candidate_submission_grows_the_table() {
    let mut session = seeded_session(Role::Admin);
    let before = session.store().candidates().len();

    session
        .submit(
            Action::AddCandidate,
            &payload(&[
                ("fullName", "Nadia Haddad"),
                ("email", "nadia@example.com"),
                ("client", "TechCorp"),
                ("recruiterReporting", "Sarah Chen"),
            ]),
        )
        .expect("a complete payload must be accepted");

    assert_eq!(session.store().candidates().len(), before + 1);
    let names: Vec<&str> = session
        .visible_candidates()
        .iter()
        .map(|candidate| candidate.full_name.as_str())
        .collect();
    assert_eq!(
        names.last(),
        Some(&"Nadia Haddad"),
        "creation order puts the new candidate last"
    );
}

#[test]
fn all_field_problems_come_back_in_one_submission() {
    let mut session = seeded_session(Role::Admin);
    let before = session.store().clone();

    let err = session
        .submit(
            Action::AddCandidate,
            &payload(&[("email", "not-an-email"), ("arpu", "12.345")]),
        )
        .expect_err("the payload must be refused");

    let DispatchError::ValidationFailed { problems } = err else {
        panic!("expected a validation failure");
    };
    assert!(problems.contains(&FieldError::Missing { field: "fullName" }));
    assert!(problems
        .iter()
        .any(|problem| matches!(problem, FieldError::Invalid { field: "email", .. })));
    assert!(problems.contains(&FieldError::Invalid {
        field: "arpu",
        reason: "exceeds scale 2".to_owned(),
    }));
    assert_eq!(session.store(), &before);
}

#[test]
fn open_positions_drill_down_reaches_a_freshly_added_client() {
    // Admin adds Acme with open positions, scopes the dashboard to it, and
    // drills into Open Positions: the table switches to clients and shows
    // Acme.
    let mut session = DashboardSession::new(Role::Admin);
    session
        .submit(
            Action::AddClient,
            &payload(&[("clientName", "Acme"), ("numberOfPositions", "3")]),
        )
        .expect("a complete payload must be accepted");

    session.set_client_filter(ScopeFilter::named("Acme"));
    session.toggle_kpi(KpiKind::OpenPositions);

    assert_eq!(session.table_view(), TableView::Clients);
    let clients = session.visible_clients();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client_name, "Acme");
    assert!(clients[0].has_open_positions());
}

#[test]
fn selecting_the_same_tile_twice_clears_the_drill_down() {
    let mut session = seeded_session(Role::Manager);
    session.toggle_kpi(KpiKind::Selections);
    assert_eq!(session.filter().drill_down, Some(KpiKind::Selections));
    session.toggle_kpi(KpiKind::Selections);
    assert_eq!(session.filter().drill_down, None);
}

#[test]
fn reads_are_idempotent_without_intervening_submissions() {
    let mut session = seeded_session(Role::TeamLead);
    session.set_period(PeriodFilter::Month(Month::November));
    session.set_recruiter_filter(ScopeFilter::named("Sarah Chen"));

    let first: Vec<_> = session
        .visible_candidates()
        .iter()
        .map(|candidate| candidate.id)
        .collect();
    let second: Vec<_> = session
        .visible_candidates()
        .iter()
        .map(|candidate| candidate.id)
        .collect();
    assert_eq!(first, second);
    assert_eq!(session.kpi_tiles(), session.kpi_tiles());
    assert_eq!(session.performance_cards(), session.performance_cards());
}

#[rstest]
#[case(FilterState::new())]
#[case(FilterState { period: PeriodFilter::Month(Month::November), ..FilterState::new() })]
#[case(FilterState { recruiter: ScopeFilter::named("Sarah Chen"), ..FilterState::new() })]
#[case(FilterState { client: ScopeFilter::named("TechCorp"), ..FilterState::new() })]
#[case(FilterState {
    period: PeriodFilter::Month(Month::October),
    recruiter: ScopeFilter::named("Sarah Chen"),
    client: ScopeFilter::named("TechCorp"),
    drill_down: Some(KpiKind::Joined),
})]
fn every_tile_stays_within_its_total(#[case] filter: FilterState) {
    let mut session = seeded_session(Role::Admin);
    session.set_period(filter.period);
    session.set_recruiter_filter(filter.recruiter.clone());
    session.set_client_filter(filter.client.clone());
    if let Some(kind) = filter.drill_down {
        session.toggle_kpi(kind);
    }

    for tile in session.kpi_tiles() {
        assert!(
            tile.value <= tile.total,
            "{} reports {}/{}",
            tile.kind,
            tile.value,
            tile.total
        );
    }
}

#[test]
fn the_matrix_never_carries_empty_cells() {
    let mut session = seeded_session(Role::Admin);
    for (filter_description, matrix) in [
        ("open", session.client_recruiter_matrix()),
        (
            "scoped",
            {
                session.set_client_filter(ScopeFilter::named("TechCorp"));
                session.client_recruiter_matrix()
            },
        ),
    ] {
        assert!(
            matrix.values().all(|&count| count > 0),
            "{filter_description} matrix holds a zero cell"
        );
    }
}

#[test]
fn drilling_down_narrows_the_table_but_not_the_tiles() {
    let mut session = seeded_session(Role::TeamLead);
    let tiles_before = session.kpi_tiles();
    let table_before = session.visible_candidates().len();

    session.toggle_kpi(KpiKind::Joined);

    assert_eq!(session.kpi_tiles(), tiles_before);
    let joined = session.visible_candidates();
    assert!(joined.len() < table_before);
    assert!(joined
        .iter()
        .all(|candidate| KpiKind::Joined.admits_candidate(candidate)));
}

#[test]
fn the_summary_headline_matches_the_seeded_store() {
    let session = seeded_session(Role::Manager);
    let summary = session.candidate_summary();

    assert_eq!(summary.total, session.store().candidates().len());
    assert!(summary.leading_recruiters.len() <= 3);
    let distinct_recruiters = session.recruiter_options().len();
    assert_eq!(
        summary.leading_recruiters.len() + summary.other_recruiter_count,
        distinct_recruiters
    );
}
