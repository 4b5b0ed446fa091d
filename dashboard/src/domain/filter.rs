//! Cross-filtering of the record set.
//!
//! A `FilterState` is an explicit value scoped to one session and passed into
//! every read; there is no ambient filter state. All active predicates
//! combine with logical AND, and the visible sequence preserves creation
//! order.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use super::records::{Candidate, CandidateStatus, Client, Closure};
use super::store::RecordStore;

/// A KPI tile, which doubles as a drill-down filter when selected.
///
/// # Examples
/// ```
/// use dashboard::domain::{KpiKind, TableView};
///
/// assert_eq!(KpiKind::Joined.label(), "Joined");
/// assert_eq!(KpiKind::OpenPositions.drill_target(), TableView::Clients);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KpiKind {
    /// Candidates still being worked: prospects and interviews.
    #[serde(rename = "Targets Pending")]
    TargetsPending,
    /// Candidates with accepted offers.
    #[serde(rename = "Selections")]
    Selections,
    /// Candidates who started at a client.
    #[serde(rename = "Joined")]
    Joined,
    /// Clients with unfilled positions.
    #[serde(rename = "Open Positions")]
    OpenPositions,
}

impl KpiKind {
    /// Every tile, in display order.
    pub const ALL: [Self; 4] = [
        Self::TargetsPending,
        Self::Selections,
        Self::Joined,
        Self::OpenPositions,
    ];

    /// Tile label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TargetsPending => "Targets Pending",
            Self::Selections => "Selections",
            Self::Joined => "Joined",
            Self::OpenPositions => "Open Positions",
        }
    }

    /// Which entity the detail table shows while this tile is the drill-down.
    pub fn drill_target(&self) -> TableView {
        match self {
            Self::OpenPositions => TableView::Clients,
            Self::TargetsPending | Self::Selections | Self::Joined => TableView::Candidates,
        }
    }

    /// Whether a candidate satisfies this tile's predicate.
    ///
    /// `OpenPositions` targets clients, so it never constrains candidates.
    pub fn admits_candidate(&self, candidate: &Candidate) -> bool {
        match self {
            Self::TargetsPending => matches!(
                candidate.status,
                CandidateStatus::Prospect | CandidateStatus::Interviewing
            ),
            Self::Selections => candidate.status == CandidateStatus::Selected,
            Self::Joined => candidate.status == CandidateStatus::Joined,
            Self::OpenPositions => true,
        }
    }
}

impl std::fmt::Display for KpiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown KPI label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKpiKindError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseKpiKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown KPI label: {}", self.input)
    }
}

impl std::error::Error for ParseKpiKindError {}

impl std::str::FromStr for KpiKind {
    type Err = ParseKpiKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Targets Pending" => Ok(Self::TargetsPending),
            "Selections" => Ok(Self::Selections),
            "Joined" => Ok(Self::Joined),
            "Open Positions" => Ok(Self::OpenPositions),
            other => Err(ParseKpiKindError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Which entity the detail table is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableView {
    /// The candidate table.
    Candidates,
    /// The client table (Open Positions drill-down).
    Clients,
}

/// Time-period filter over joining dates.
///
/// Buckets are calendar months, matching the dashboard's month dropdown;
/// records without a joining date never match a month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    /// All periods.
    #[default]
    All,
    /// One calendar month.
    Month(Month),
}

impl PeriodFilter {
    /// Whether a record dated `date` falls inside this period.
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => {
                date.is_some_and(|value| value.month() == month.number_from_month())
            }
        }
    }

    /// The preceding period bucket, used as the performance baseline.
    ///
    /// `All` has no baseline.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::All => None,
            Self::Month(month) => Some(Self::Month(month.pred())),
        }
    }
}

/// Filter on a denormalized name field: everything, or one exact name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScopeFilter {
    /// No restriction.
    #[default]
    All,
    /// Only records naming this value.
    Named(String),
}

impl ScopeFilter {
    /// Restrict to the given name.
    pub fn named(value: impl Into<String>) -> Self {
        Self::Named(value.into())
    }

    /// Whether a record carrying `value` passes this scope.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => value == Some(name.as_str()),
        }
    }
}

/// The simultaneously active filters for one dashboard session.
///
/// Each field persists until explicitly changed; nothing resets implicitly.
///
/// # Examples
/// ```
/// use dashboard::domain::{FilterState, KpiKind};
///
/// let mut filter = FilterState::new();
/// filter.toggle_drill_down(KpiKind::Joined);
/// assert_eq!(filter.drill_down, Some(KpiKind::Joined));
/// filter.toggle_drill_down(KpiKind::Joined);
/// assert_eq!(filter.drill_down, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Time-period bucket.
    pub period: PeriodFilter,
    /// Recruiter the candidates report to.
    pub recruiter: ScopeFilter,
    /// Client the candidates are pipelined for.
    pub client: ScopeFilter,
    /// Extra predicate from the selected KPI tile, if any.
    pub drill_down: Option<KpiKind>,
}

impl FilterState {
    /// Filter state with every filter wide open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a KPI tile, or clear it when it is already selected.
    pub fn toggle_drill_down(&mut self, kind: KpiKind) {
        self.drill_down = if self.drill_down == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    /// The same filters with the drill-down cleared.
    ///
    /// Tiles and aggregates use this so a selected tile does not filter
    /// itself to 100%.
    pub fn without_drill_down(&self) -> Self {
        Self {
            drill_down: None,
            ..self.clone()
        }
    }

    /// Which entity the detail table shows under this filter.
    pub fn table_view(&self) -> TableView {
        self.drill_down
            .map_or(TableView::Candidates, |kind| kind.drill_target())
    }
}

/// Candidates passing every active filter, in creation order.
pub fn visible_candidates<'a>(store: &'a RecordStore, filter: &FilterState) -> Vec<&'a Candidate> {
    store
        .candidates()
        .iter()
        .filter(|candidate| candidate_visible(candidate, filter))
        .collect()
}

fn candidate_visible(candidate: &Candidate, filter: &FilterState) -> bool {
    filter.period.admits(candidate.date_of_joining)
        && filter.recruiter.admits(candidate.recruiter_reporting.as_deref())
        && filter.client.admits(candidate.client.as_deref())
        && filter
            .drill_down
            .is_none_or(|kind| kind.admits_candidate(candidate))
}

/// Clients passing the client scope, in creation order.
///
/// While the Open Positions tile is the drill-down, only clients with
/// unfilled positions remain (the table's target entity switches to clients).
pub fn visible_clients<'a>(store: &'a RecordStore, filter: &FilterState) -> Vec<&'a Client> {
    let require_open = filter.drill_down == Some(KpiKind::OpenPositions);
    store
        .clients()
        .iter()
        .filter(|client| {
            filter.client.admits(Some(client.client_name.as_str()))
                && (!require_open || client.has_open_positions())
        })
        .collect()
}

/// Closures passing the period, recruiter, and client scopes, in creation
/// order. The drill-down never applies to closures.
pub fn visible_closures<'a>(store: &'a RecordStore, filter: &FilterState) -> Vec<&'a Closure> {
    store
        .closures()
        .iter()
        .filter(|closure| {
            filter.period.admits(closure.date_of_joining)
                && filter.recruiter.admits(closure.recruiter.as_deref())
                && filter.client.admits(closure.client.as_deref())
        })
        .collect()
}
