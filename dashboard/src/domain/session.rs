//! Dashboard session facade.
//!
//! One session per logical actor: it owns the actor's role, the record store,
//! and the filter state, and surfaces the operations the presentation layer
//! calls. Nothing here is shared across sessions and no state hides outside
//! the session value.

use std::collections::BTreeMap;

use super::dispatch::{self, DispatchError, Payload};
use super::filter::{
    self, FilterState, KpiKind, PeriodFilter, ScopeFilter, TableView,
};
use super::policy::{allowed_actions, Action};
use super::records::{Candidate, Client, Record};
use super::report::{
    self, CandidateSummary, DepartmentBreakdown, KpiTile, PerformanceCard, TopPerformer,
};
use super::store::RecordStore;
use super::Role;

/// One actor's dashboard: role, records, and active filters.
///
/// # Examples
/// ```
/// use dashboard::domain::{Action, DashboardSession, Payload, Role};
///
/// let mut session = DashboardSession::new(Role::Manager);
/// let mut payload = Payload::new();
/// payload.insert("clientName".to_owned(), "Acme".to_owned());
/// session.submit(Action::AddClient, &payload).unwrap();
/// assert_eq!(session.store().clients().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DashboardSession {
    role: Role,
    store: RecordStore,
    filter: FilterState,
}

impl DashboardSession {
    /// Start a session for the given role over an empty store.
    pub fn new(role: Role) -> Self {
        Self::with_store(role, RecordStore::new())
    }

    /// Start a session over pre-existing records.
    pub fn with_store(role: Role, store: RecordStore) -> Self {
        Self {
            role,
            store,
            filter: FilterState::new(),
        }
    }

    /// The role driving this session.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The records visible to this session.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The currently active filters.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Actions this session's role may trigger, in display order.
    pub fn allowed_actions(&self) -> &'static [Action] {
        allowed_actions(self.role)
    }

    /// Submit a create-record form for this session's role.
    ///
    /// # Errors
    ///
    /// See [`dispatch::submit`]; the store is untouched on every error path.
    pub fn submit(&mut self, action: Action, payload: &Payload) -> Result<Record, DispatchError> {
        dispatch::submit(self.role, action, payload, &mut self.store)
    }

    /// Change the period filter; other filters persist.
    pub fn set_period(&mut self, period: PeriodFilter) {
        self.filter.period = period;
    }

    /// Change the recruiter filter; other filters persist.
    pub fn set_recruiter_filter(&mut self, recruiter: ScopeFilter) {
        self.filter.recruiter = recruiter;
    }

    /// Change the client filter; other filters persist.
    pub fn set_client_filter(&mut self, client: ScopeFilter) {
        self.filter.client = client;
    }

    /// Select a KPI tile, or clear it when it is already selected.
    pub fn toggle_kpi(&mut self, kind: KpiKind) {
        self.filter.toggle_drill_down(kind);
    }

    /// Which entity the detail table currently shows.
    pub fn table_view(&self) -> TableView {
        self.filter.table_view()
    }

    /// Candidates passing every active filter, in creation order.
    pub fn visible_candidates(&self) -> Vec<&Candidate> {
        filter::visible_candidates(&self.store, &self.filter)
    }

    /// Clients passing the client scope (and the Open Positions drill-down
    /// when active), in creation order.
    pub fn visible_clients(&self) -> Vec<&Client> {
        filter::visible_clients(&self.store, &self.filter)
    }

    /// The four KPI tiles under the current filters.
    pub fn kpi_tiles(&self) -> Vec<KpiTile> {
        report::kpi_tiles(&self.store, &self.filter)
    }

    /// The four performance cards under the current filters.
    pub fn performance_cards(&self) -> Vec<PerformanceCard> {
        report::performance_cards(&self.store, &self.filter)
    }

    /// Sparse candidate counts per (client, recruiter) pair.
    pub fn client_recruiter_matrix(&self) -> BTreeMap<(String, String), usize> {
        report::client_recruiter_matrix(&self.store, &self.filter)
    }

    /// Headline summary of the visible candidates.
    pub fn candidate_summary(&self) -> CandidateSummary {
        report::candidate_summary(&self.store, &self.filter)
    }

    /// Recruiters ranked by settled work, best first.
    pub fn top_performers(&self, limit: usize) -> Vec<TopPerformer> {
        report::top_performers(&self.store, &self.filter, limit)
    }

    /// Candidate volume per department against the previous period.
    pub fn department_analytics(&self) -> Vec<DepartmentBreakdown> {
        report::department_analytics(&self.store, &self.filter)
    }

    /// Sorted distinct recruiter names for the filter dropdown.
    pub fn recruiter_options(&self) -> Vec<String> {
        report::recruiter_options(&self.store)
    }

    /// Sorted distinct client names for the filter dropdown.
    pub fn client_options(&self) -> Vec<String> {
        report::client_options(&self.store)
    }
}
