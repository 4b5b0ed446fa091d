//! Aggregation over the filtered record set.
//!
//! Everything here is stateless and recomputed on read from the store and the
//! filter; with a record volume this small, caching would only buy
//! invalidation bugs. Tiles and aggregates always use the drill-down-free
//! view, so a selected tile never filters itself to 100%.

use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::{visible_candidates, visible_closures, FilterState, KpiKind};
use super::records::{Candidate, CandidateStatus};
use super::store::RecordStore;

/// One KPI tile: a count against the total it is drawn from.
///
/// ## Invariants
/// - `value <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTile {
    /// Which tile this is; its label is the drill-down key.
    pub kind: KpiKind,
    /// Records matching the tile's predicate.
    pub value: usize,
    /// Size of the set the predicate ran over.
    pub total: usize,
}

/// Direction of a performance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// At or above the baseline.
    Up,
    /// Below the baseline.
    Down,
}

/// Measures compared on the performance cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    /// Candidates entering the pipeline.
    NewCandidates,
    /// Candidates with accepted offers.
    Selections,
    /// Candidates who started.
    Joined,
    /// Closed placements.
    Closures,
}

impl CardKind {
    /// Every card, in display order.
    pub const ALL: [Self; 4] = [
        Self::NewCandidates,
        Self::Selections,
        Self::Joined,
        Self::Closures,
    ];

    /// Card label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewCandidates => "New Candidates",
            Self::Selections => "Selections",
            Self::Joined => "Joined",
            Self::Closures => "Closures",
        }
    }
}

/// One performance card: the current period measured against the previous.
///
/// A change of zero trends up; the displayed magnitude is always the
/// absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCard {
    /// Which measure the card reports.
    pub kind: CardKind,
    /// Count in the current period.
    pub value: usize,
    /// Count in the previous period bucket, serving as the target.
    pub target: usize,
    /// Direction of the change.
    pub trend: Trend,
    /// Absolute magnitude of the change.
    pub change: usize,
}

/// Headline over the candidate table: who the visible candidates were
/// selected by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    /// Candidates in the drill-down-free visible set.
    pub total: usize,
    /// Up to three recruiters with the most visible candidates.
    pub leading_recruiters: Vec<String>,
    /// Distinct recruiters beyond the leading three.
    pub other_recruiter_count: usize,
}

/// One row of the Top Performers card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    /// Recruiter's full name.
    pub name: String,
    /// Team, when a recruiter record carries one.
    pub team: Option<String>,
    /// Selected plus joined candidates reporting to this recruiter.
    pub selections: usize,
}

/// Candidate volume for one department, with change against the previous
/// period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentBreakdown {
    /// Department name.
    pub department: String,
    /// Candidates in the current period.
    pub count: usize,
    /// Direction against the previous period bucket.
    pub trend: Trend,
    /// Absolute magnitude of the change.
    pub change: usize,
}

/// The four KPI tiles in display order.
///
/// Tiles ignore the drill-down: they reflect the period, recruiter, and
/// client filters only. Candidate tiles count against the visible candidate
/// set; Open Positions counts clients in scope with unfilled positions
/// against all clients in scope.
pub fn kpi_tiles(store: &RecordStore, filter: &FilterState) -> Vec<KpiTile> {
    let base = filter.without_drill_down();
    let candidates = visible_candidates(store, &base);
    let clients_in_scope: Vec<_> = store
        .clients()
        .iter()
        .filter(|client| base.client.admits(Some(client.client_name.as_str())))
        .collect();

    KpiKind::ALL
        .iter()
        .map(|kind| match kind {
            KpiKind::OpenPositions => KpiTile {
                kind: *kind,
                value: clients_in_scope
                    .iter()
                    .filter(|client| client.has_open_positions())
                    .count(),
                total: clients_in_scope.len(),
            },
            KpiKind::TargetsPending | KpiKind::Selections | KpiKind::Joined => KpiTile {
                kind: *kind,
                value: candidates
                    .iter()
                    .filter(|candidate| kind.admits_candidate(candidate))
                    .count(),
                total: candidates.len(),
            },
        })
        .collect()
}

/// The four performance cards in display order.
///
/// The previous calendar month is the baseline; under `PeriodFilter::All`
/// there is no previous bucket and every target is zero.
pub fn performance_cards(store: &RecordStore, filter: &FilterState) -> Vec<PerformanceCard> {
    let current = filter.without_drill_down();
    let previous = current.period.previous().map(|period| FilterState {
        period,
        ..current.clone()
    });

    let current_counts = card_counts(store, &current);
    let previous_counts = previous.map_or([0; 4], |baseline| card_counts(store, &baseline));

    CardKind::ALL
        .iter()
        .zip(current_counts.iter().zip(previous_counts.iter()))
        .map(|(kind, (&value, &target))| {
            let (trend, change) = compare(value, target);
            PerformanceCard {
                kind: *kind,
                value,
                target,
                trend,
                change,
            }
        })
        .collect()
}

/// Counts for the four card measures under one filter, in card order.
fn card_counts(store: &RecordStore, filter: &FilterState) -> [usize; 4] {
    let candidates = visible_candidates(store, filter);
    let status_count = |status: CandidateStatus| {
        candidates
            .iter()
            .filter(|candidate| candidate.status == status)
            .count()
    };
    [
        candidates.len(),
        status_count(CandidateStatus::Selected),
        status_count(CandidateStatus::Joined),
        visible_closures(store, filter).len(),
    ]
}

/// Trend and absolute change of `value` against `target`; zero trends up.
fn compare(value: usize, target: usize) -> (Trend, usize) {
    if value >= target {
        (Trend::Up, value - target)
    } else {
        (Trend::Down, target - value)
    }
}

/// Sparse candidate counts per (client, recruiter) pair.
///
/// Pairs with no visible candidates never appear; candidates missing either
/// name do not contribute a cell.
pub fn client_recruiter_matrix(
    store: &RecordStore,
    filter: &FilterState,
) -> BTreeMap<(String, String), usize> {
    let base = filter.without_drill_down();
    let mut cells = BTreeMap::new();
    for candidate in visible_candidates(store, &base) {
        if let (Some(client), Some(recruiter)) =
            (&candidate.client, &candidate.recruiter_reporting)
        {
            *cells.entry((client.clone(), recruiter.clone())).or_insert(0) += 1;
        }
    }
    cells
}

/// Headline summary of the visible candidates and their busiest recruiters.
///
/// Recruiters rank by visible candidate count, ties broken by name, so the
/// headline is deterministic.
pub fn candidate_summary(store: &RecordStore, filter: &FilterState) -> CandidateSummary {
    let base = filter.without_drill_down();
    let candidates = visible_candidates(store, &base);
    let ranked = rank_recruiters(&candidates, |_| true);

    let leading_recruiters: Vec<String> = ranked.iter().take(3).map(|(name, _)| name.clone()).collect();
    CandidateSummary {
        total: candidates.len(),
        other_recruiter_count: ranked.len().saturating_sub(leading_recruiters.len()),
        leading_recruiters,
    }
}

/// Recruiters ranked by selected-plus-joined candidates, best first.
///
/// Ties break by name; at most `limit` rows are returned.
pub fn top_performers(
    store: &RecordStore,
    filter: &FilterState,
    limit: usize,
) -> Vec<TopPerformer> {
    let base = filter.without_drill_down();
    let candidates = visible_candidates(store, &base);
    let ranked = rank_recruiters(&candidates, |candidate| {
        matches!(
            candidate.status,
            CandidateStatus::Selected | CandidateStatus::Joined
        )
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(name, selections)| {
            let team = store
                .recruiters()
                .iter()
                .find(|recruiter| recruiter.full_name == name)
                .and_then(|recruiter| recruiter.team.clone());
            TopPerformer {
                name,
                team,
                selections,
            }
        })
        .collect()
}

/// Count visible candidates per reporting recruiter, filtered by `counts`,
/// ordered by descending count then name.
fn rank_recruiters(
    candidates: &[&Candidate],
    counts: impl Fn(&Candidate) -> bool,
) -> Vec<(String, usize)> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for candidate in candidates.iter().copied() {
        if let Some(recruiter) = candidate.recruiter_reporting.as_deref() {
            if counts(candidate) {
                *totals.entry(recruiter).or_insert(0) += 1;
            }
        }
    }
    let mut ranked: Vec<(String, usize)> = totals
        .into_iter()
        .map(|(name, count)| (name.to_owned(), count))
        .collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));
    ranked
}

/// Candidate volume per department, against the previous period bucket.
///
/// Candidates without a department are excluded; departments are listed
/// alphabetically. A department absent from the previous bucket compares
/// against zero.
pub fn department_analytics(store: &RecordStore, filter: &FilterState) -> Vec<DepartmentBreakdown> {
    let current = filter.without_drill_down();
    let previous = current.period.previous().map(|period| FilterState {
        period,
        ..current.clone()
    });

    let current_counts = department_counts(store, &current);
    let previous_counts = previous.map_or_else(BTreeMap::new, |baseline| {
        department_counts(store, &baseline)
    });

    current_counts
        .into_iter()
        .map(|(department, count)| {
            let baseline = previous_counts.get(&department).copied().unwrap_or(0);
            let (trend, change) = compare(count, baseline);
            DepartmentBreakdown {
                department,
                count,
                trend,
                change,
            }
        })
        .collect()
}

fn department_counts(store: &RecordStore, filter: &FilterState) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for candidate in visible_candidates(store, filter) {
        if let Some(department) = candidate.department.as_deref() {
            *counts.entry(department.to_owned()).or_insert(0) += 1;
        }
    }
    counts
}

/// Sorted distinct recruiter names for the recruiter filter dropdown.
///
/// Unions recruiter records with the names candidates actually report to, so
/// denormalized entries remain selectable.
pub fn recruiter_options(store: &RecordStore) -> Vec<String> {
    let mut names: Vec<String> = store
        .recruiters()
        .iter()
        .map(|recruiter| recruiter.full_name.clone())
        .chain(
            store
                .candidates()
                .iter()
                .filter_map(|candidate| candidate.recruiter_reporting.clone()),
        )
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Sorted distinct client names for the client filter dropdown.
pub fn client_options(store: &RecordStore) -> Vec<String> {
    let mut names: Vec<String> = store
        .clients()
        .iter()
        .map(|client| client.client_name.clone())
        .chain(
            store
                .candidates()
                .iter()
                .filter_map(|candidate| candidate.client.clone()),
        )
        .collect();
    names.sort();
    names.dedup();
    names
}
