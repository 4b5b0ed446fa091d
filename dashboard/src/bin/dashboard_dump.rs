//! Print the seeded dashboard as a JSON snapshot.
//!
//! `DASHBOARD_PERIOD` narrows the snapshot to one calendar month, e.g.
//! `DASHBOARD_PERIOD=November dashboard-dump`.

use std::env;

use chrono::Month;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard::domain::{
    Candidate, CandidateSummary, Client, DashboardSession, DepartmentBreakdown, KpiTile,
    PerformanceCard, PeriodFilter, Role, TableView, TopPerformer,
};
use dashboard::example_data;

/// One cell of the client-by-recruiter matrix, flattened for JSON.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatrixCell {
    client: String,
    recruiter: String,
    count: usize,
}

/// Everything the dashboard renders, derived from one seeded session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    role: Role,
    table_view: TableView,
    tiles: Vec<KpiTile>,
    cards: Vec<PerformanceCard>,
    matrix: Vec<MatrixCell>,
    summary: CandidateSummary,
    top_performers: Vec<TopPerformer>,
    departments: Vec<DepartmentBreakdown>,
    candidates: Vec<&'a Candidate>,
    clients: Vec<&'a Client>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .ok();

    let store = example_data::seed()?;
    let mut session = DashboardSession::with_store(Role::Admin, store);
    if let Ok(raw) = env::var("DASHBOARD_PERIOD") {
        match raw.parse::<Month>() {
            Ok(month) => session.set_period(PeriodFilter::Month(month)),
            Err(_) => warn!(period = %raw, "ignoring unparseable DASHBOARD_PERIOD"),
        }
    }

    let matrix = session
        .client_recruiter_matrix()
        .into_iter()
        .map(|((client, recruiter), count)| MatrixCell {
            client,
            recruiter,
            count,
        })
        .collect();
    let snapshot = Snapshot {
        role: session.role(),
        table_view: session.table_view(),
        tiles: session.kpi_tiles(),
        cards: session.performance_cards(),
        matrix,
        summary: session.candidate_summary(),
        top_performers: session.top_performers(4),
        departments: session.department_analytics(),
        candidates: session.visible_candidates(),
        clients: session.visible_clients(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
